//! Analysis contract shared by the Mzalendo Lens application and its analyzers.
//!
//! The application never talks to the generative-AI service directly: it
//! hands an [`AnalysisRequest`] to an [`Analyzer`] and gets back a validated
//! [`BillAnalysis`] or a typed [`AnalysisError`].

pub mod analyzer;
pub mod error;
pub mod parse;
pub mod schema;
pub mod types;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use parse::{parse_analysis, strip_code_fences, validate_analysis, CardinalityPolicy};
pub use types::{
    AnalysisRequest, BillAnalysis, DocumentKind, DocumentUpload, ImpactCard, ImpactCategory,
    QuizQuestion,
};

// Re-export async trait for analyzer implementations
pub use async_trait::async_trait;
