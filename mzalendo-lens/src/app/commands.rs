//! Command pattern for App communication
//!
//! Background tasks (the analysis call, the reveal timer) never touch the
//! session directly. They send an [`AppCommand`] which the UI loop applies
//! on its next tick.

use mzalendo_lens_sdk::{AnalysisError, BillAnalysis};

use crate::quiz::RevealTicket;
use crate::session::SubmissionTicket;

/// Commands that can be sent to the App from async tasks
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Outcome of the analysis call started for `ticket`
    AnalysisFinished {
        ticket: SubmissionTicket,
        outcome: Result<BillAnalysis, AnalysisError>,
    },

    /// Reveal delay elapsed for the answered question
    RevealExplanation(RevealTicket),
}

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}
