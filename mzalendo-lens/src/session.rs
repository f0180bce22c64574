//! Screen state machine for one Intake -> Breakdown -> Quiz -> Summary traversal

use std::sync::Arc;

use chrono::{DateTime, Local};
use mzalendo_lens_sdk::{AnalysisError, AnalysisRequest, BillAnalysis, DocumentUpload};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::quiz::{QuizEngine, QuizScore, QuizStep, RevealTicket};

/// Log target for collaborator data-contract violations
pub const CONTRACT_TARGET: &str = "mzalendo_lens::contract";

/// Identifies the analysis call a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(Uuid);

/// What the user has typed or attached on the intake screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeDraft {
    pub text: String,
    pub document: Option<DocumentUpload>,
}

impl IntakeDraft {
    /// Submission needs non-blank text or a non-empty document
    pub fn is_ready(&self) -> bool {
        !self.text.trim().is_empty() || self.document.as_ref().is_some_and(|d| !d.is_empty())
    }

    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest::new(Some(self.text.clone()), self.document.clone())
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn attach(&mut self, document: DocumentUpload) {
        self.document = Some(document);
    }

    pub fn detach(&mut self) -> Option<DocumentUpload> {
        self.document.take()
    }
}

/// Discriminant of [`Screen`], for labels and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Intake,
    Breakdown,
    Quiz,
    Summary,
}

/// Active screen. Each variant carries exactly the data it needs, so a quiz
/// without an analysis cannot be represented.
#[derive(Debug, Clone)]
pub enum Screen {
    Intake,
    Breakdown {
        analysis: Arc<BillAnalysis>,
    },
    Quiz {
        analysis: Arc<BillAnalysis>,
        quiz: QuizEngine,
    },
    Summary {
        analysis: Arc<BillAnalysis>,
        score: QuizScore,
    },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Intake => ScreenKind::Intake,
            Screen::Breakdown { .. } => ScreenKind::Breakdown,
            Screen::Quiz { .. } => ScreenKind::Quiz,
            Screen::Summary { .. } => ScreenKind::Summary,
        }
    }

    pub fn analysis(&self) -> Option<&Arc<BillAnalysis>> {
        match self {
            Screen::Intake => None,
            Screen::Breakdown { analysis }
            | Screen::Quiz { analysis, .. }
            | Screen::Summary { analysis, .. } => Some(analysis),
        }
    }
}

impl ScreenKind {
    pub fn phase_label(&self) -> &'static str {
        match self {
            ScreenKind::Intake => "PHASE 01: INTEL",
            ScreenKind::Breakdown => "PHASE 02: DECODE",
            ScreenKind::Quiz => "PHASE 03: SIMULATE",
            ScreenKind::Summary => "PHASE 04: MASTERY",
        }
    }
}

/// Rejected session operations. State is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("'{action}' is not available on the {screen:?} screen")]
    InvalidTransition {
        action: &'static str,
        screen: ScreenKind,
    },

    #[error("an analysis is already in progress")]
    AlreadyLoading,

    #[error("nothing to analyze: add bill text or attach a document")]
    EmptyDraft,
}

/// Session state: the active screen plus intake draft, error banner and the
/// in-flight submission, if any.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    screen: Screen,
    draft: IntakeDraft,
    error: Option<String>,
    pending: Option<SubmissionTicket>,
    submitted_at: Option<DateTime<Local>>,
    analyzed_at: Option<DateTime<Local>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_draft(IntakeDraft::default())
    }

    /// Start on intake with a prefilled draft
    pub fn with_draft(draft: IntakeDraft) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            screen: Screen::Intake,
            draft,
            error: None,
            pending: None,
            submitted_at: None,
            analyzed_at: None,
        };
        debug!(session = %session.id, "session created");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the current analysis came back, shown on the breakdown
    pub fn analyzed_at(&self) -> Option<DateTime<Local>> {
        self.analyzed_at
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn phase_label(&self) -> &'static str {
        self.screen.kind().phase_label()
    }

    pub fn analysis(&self) -> Option<&Arc<BillAnalysis>> {
        self.screen.analysis()
    }

    pub fn quiz(&self) -> Option<&QuizEngine> {
        match &self.screen {
            Screen::Quiz { quiz, .. } => Some(quiz),
            _ => None,
        }
    }

    pub fn final_score(&self) -> Option<QuizScore> {
        match &self.screen {
            Screen::Summary { score, .. } => Some(*score),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// The draft is only editable on intake while nothing is in flight
    pub fn draft_mut(&mut self) -> Option<&mut IntakeDraft> {
        if matches!(self.screen, Screen::Intake) && self.pending.is_none() {
            Some(&mut self.draft)
        } else {
            None
        }
    }

    /// Whether the submit trigger should be enabled
    pub fn can_submit(&self) -> bool {
        matches!(self.screen, Screen::Intake) && self.pending.is_none() && self.draft.is_ready()
    }

    // ========================================================================
    // Intake
    // ========================================================================

    /// Enter the loading state and hand back the request to run.
    pub fn begin_submit(&mut self) -> Result<(SubmissionTicket, AnalysisRequest), SessionError> {
        if !matches!(self.screen, Screen::Intake) {
            return Err(self.invalid("submit"));
        }
        if self.pending.is_some() {
            return Err(SessionError::AlreadyLoading);
        }
        if !self.draft.is_ready() {
            return Err(SessionError::EmptyDraft);
        }

        let ticket = SubmissionTicket(Uuid::new_v4());
        let request = self.draft.to_request();
        self.error = None;
        self.pending = Some(ticket);
        self.submitted_at = Some(Local::now());

        info!(
            session = %self.id,
            text_chars = request.text.as_ref().map(|t| t.chars().count()).unwrap_or(0),
            document = ?request.document,
            "analysis submitted"
        );
        Ok((ticket, request))
    }

    /// Apply the result of a submission. Results for anything but the
    /// pending ticket are discarded and `false` is returned.
    pub fn finish_submit(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<BillAnalysis, AnalysisError>,
    ) -> bool {
        if self.pending != Some(ticket) {
            debug!(session = %self.id, "discarding result for a stale submission");
            return false;
        }
        self.pending = None;

        let now = Local::now();
        let duration_ms = self
            .submitted_at
            .take()
            .map(|at| (now - at).num_milliseconds())
            .unwrap_or(0);

        match outcome {
            Ok(analysis) => {
                info!(
                    session = %self.id,
                    duration_ms,
                    impact_cards = analysis.impact_cards.len(),
                    questions = analysis.quiz.len(),
                    "analysis ready"
                );
                self.analyzed_at = Some(now);
                self.screen = Screen::Breakdown {
                    analysis: Arc::new(analysis),
                };
            }
            Err(err) => {
                error!(
                    session = %self.id,
                    duration_ms,
                    kind = err.kind(),
                    error = %err,
                    "analysis failed"
                );
                self.error = Some(err.user_message());
            }
        }
        true
    }

    // ========================================================================
    // Breakdown
    // ========================================================================

    /// Breakdown -> Quiz. A quiz with no questions completes on the spot.
    pub fn acknowledge(&mut self) -> Result<(), SessionError> {
        let analysis = match &self.screen {
            Screen::Breakdown { analysis } => Arc::clone(analysis),
            _ => return Err(self.invalid("acknowledge")),
        };

        let quiz = QuizEngine::new(analysis.quiz.clone());
        if quiz.is_empty() {
            warn!(
                target: CONTRACT_TARGET,
                session = %self.id,
                "analysis contains no quiz questions; completing quiz with score 0"
            );
            self.screen = Screen::Summary {
                analysis,
                score: quiz.final_score(),
            };
            return Ok(());
        }

        info!(session = %self.id, questions = quiz.total(), "quiz started");
        self.screen = Screen::Quiz { analysis, quiz };
        Ok(())
    }

    // ========================================================================
    // Quiz
    // ========================================================================

    pub fn select_answer(&mut self, option: usize) -> Result<Option<RevealTicket>, SessionError> {
        match &mut self.screen {
            Screen::Quiz { quiz, .. } => Ok(quiz.select_answer(option)),
            _ => Err(self.invalid("select answer")),
        }
    }

    /// Apply a delayed explanation reveal; stale tickets are ignored
    pub fn reveal_explanation(&mut self, ticket: RevealTicket) -> bool {
        match &mut self.screen {
            Screen::Quiz { quiz, .. } => quiz.reveal_explanation(ticket),
            _ => false,
        }
    }

    /// Next question, or Summary after the last one
    pub fn advance(&mut self) -> Result<Option<QuizStep>, SessionError> {
        let (step, analysis) = match &mut self.screen {
            Screen::Quiz { analysis, quiz } => (quiz.advance(), Arc::clone(analysis)),
            _ => return Err(self.invalid("advance")),
        };

        if let Some(QuizStep::Completed(score)) = step {
            info!(session = %self.id, score = %score, pass = score.is_pass(), "quiz completed");
            self.screen = Screen::Summary { analysis, score };
        }
        Ok(step)
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Throw everything away and start over on an empty intake screen.
    pub fn reset(&mut self) {
        info!(session = %self.id, from = ?self.kind(), "session reset");
        *self = Session::new();
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        let err = SessionError::InvalidTransition {
            action,
            screen: self.kind(),
        };
        debug!(session = %self.id, error = %err, "rejected transition");
        err
    }
}
