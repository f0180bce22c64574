//! Error taxonomy for analysis calls

use thiserror::Error;

/// Why an analysis could not be produced.
///
/// None of these are retried; the session surfaces [`user_message`] and
/// returns to intake with the user's input intact.
///
/// [`user_message`]: AnalysisError::user_message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The service credential is missing. Raised before any network call.
    #[error("analysis service is not configured: {reason}")]
    Configuration { reason: String },

    /// The service answered but gave no usable text (e.g. safety filtering)
    #[error("analysis service returned no content: {reason}")]
    EmptyResponse { reason: String },

    /// The text could not be read as a bill analysis
    #[error("analysis response is malformed: {reason}")]
    MalformedResponse { reason: String },

    /// Transport failure or non-success HTTP status
    #[error("analysis request failed: {reason}")]
    Request { reason: String },
}

impl AnalysisError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn empty(reason: impl Into<String>) -> Self {
        Self::EmptyResponse {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn request(reason: impl Into<String>) -> Self {
        Self::Request {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Configuration { .. } => "configuration",
            AnalysisError::EmptyResponse { .. } => "empty_response",
            AnalysisError::MalformedResponse { .. } => "malformed_response",
            AnalysisError::Request { .. } => "request",
        }
    }

    /// Banner text shown on the intake screen
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Configuration { reason } => format!(
                "SETUP NEEDED: {}. Set GEMINI_API_KEY (or API_KEY) and restart.",
                reason
            ),
            AnalysisError::EmptyResponse { .. } => {
                "NO SIGNAL: The analyst came back empty-handed. Try clearer text or a sharper scan."
                    .to_string()
            }
            AnalysisError::MalformedResponse { .. } => {
                "SYSTEM OVERLOAD: Bill complexity exceeded limits. Try a clearer scan or a shorter section."
                    .to_string()
            }
            AnalysisError::Request { .. } => {
                "CONNECTION LOST: Could not reach the analysis service. Check your network and try again."
                    .to_string()
            }
        }
    }
}
