//! The analysis capability the application depends on

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, BillAnalysis};

/// Turns bill text and/or a document into a validated [`BillAnalysis`].
///
/// Implementations issue at most one call to their backend per invocation
/// and never retry. Callers guarantee the request is not empty.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    async fn analyze(&self, request: AnalysisRequest) -> Result<BillAnalysis, AnalysisError>;
}
