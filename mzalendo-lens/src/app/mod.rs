//! Application state and module organization
//!
//! `App` wraps the [`Session`] with everything the terminal needs around it:
//! the analyzer, the tokio handle used for background work, the command
//! channel those tasks report back on, toasts, and overlay state.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use mzalendo_lens_sdk::{AnalysisError, Analyzer};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::LensConfig;
use crate::quiz::QuizStep;
use crate::session::{IntakeDraft, ScreenKind, Session, SessionError};
use crate::upload::load_document;

mod commands;
mod file_browser;
mod input;
mod notifications;

pub use commands::{AppCommand, NotificationLevel};
pub use file_browser::{BrowserPick, FileBrowser};
pub use notifications::{Notification, NotificationManager};

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

pub struct App {
    pub session: Session,
    pub config: LensConfig,
    pub notifications: NotificationManager,
    pub file_browser: FileBrowser,
    pub show_detailed: bool,
    pub detailed_scroll: u16,
    pub should_quit: bool,
    pub spinner_frame: usize,
    detailed_max_scroll: Cell<u16>,
    loading_since: Option<Instant>,
    analyzer: Arc<dyn Analyzer>,
    tokio_handle: Handle,
    command_tx: mpsc::UnboundedSender<AppCommand>,
    command_rx: mpsc::UnboundedReceiver<AppCommand>,
    reveal_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: LensConfig, analyzer: Arc<dyn Analyzer>, tokio_handle: Handle) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let draft = IntakeDraft {
            text: config.initial_text.clone().unwrap_or_default(),
            document: None,
        };

        let mut app = Self {
            session: Session::with_draft(draft),
            config,
            notifications: NotificationManager::new(),
            file_browser: FileBrowser::new(current_dir),
            show_detailed: false,
            detailed_scroll: 0,
            should_quit: false,
            spinner_frame: 0,
            detailed_max_scroll: Cell::new(0),
            loading_since: None,
            analyzer,
            tokio_handle,
            command_tx,
            command_rx,
            reveal_task: None,
        };

        if let Some(path) = app.config.initial_file.clone() {
            app.attach_file(&path);
        }

        info!(analyzer = app.analyzer.name(), model = %app.config.model, "app ready");
        app
    }

    // ========================================================================
    // Intake
    // ========================================================================

    /// Read a local file into the draft. Failures become a notification
    /// and leave the draft untouched.
    pub fn attach_file(&mut self, path: &Path) -> bool {
        if self.session.draft_mut().is_none() {
            debug!("attach ignored outside an idle intake screen");
            return false;
        }

        match load_document(path, self.config.max_upload_bytes) {
            Ok(document) => {
                let label = format!("{} ({})", document.file_name, document.kind);
                if let Some(draft) = self.session.draft_mut() {
                    draft.attach(document);
                }
                self.notifications.success("Document Locked & Loaded", label);
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "attach rejected");
                self.notifications.error("Upload rejected", err.to_string());
                false
            }
        }
    }

    pub fn detach_file(&mut self) {
        if let Some(document) = self.session.draft_mut().and_then(|d| d.detach()) {
            self.notifications
                .info("Document removed", document.file_name);
        }
    }

    /// Start the analysis call in the background
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let (ticket, request) = self.session.begin_submit()?;
        self.loading_since = Some(Instant::now());

        let analyzer = Arc::clone(&self.analyzer);
        let tx = self.command_tx.clone();
        let handle = self.tokio_handle.clone();

        self.tokio_handle.spawn(async move {
            // Run in its own task so a panic still reports back
            let outcome = match handle.spawn(async move { analyzer.analyze(request).await }).await {
                Ok(outcome) => outcome,
                Err(join_err) => Err(AnalysisError::request(format!(
                    "analysis task failed: {}",
                    join_err
                ))),
            };
            let _ = tx.send(AppCommand::AnalysisFinished { ticket, outcome });
        });

        Ok(())
    }

    // ========================================================================
    // Breakdown / Quiz
    // ========================================================================

    pub fn enter_quiz(&mut self) -> Result<(), SessionError> {
        self.session.acknowledge()
    }

    /// Record an answer and schedule the explanation reveal
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        let Some(ticket) = self.session.select_answer(option)? else {
            return Ok(());
        };

        self.cancel_reveal();
        let delay = self.config.reveal_delay;
        let tx = self.command_tx.clone();
        self.reveal_task = Some(self.tokio_handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppCommand::RevealExplanation(ticket));
        }));
        Ok(())
    }

    pub fn advance(&mut self) -> Result<Option<QuizStep>, SessionError> {
        let step = self.session.advance()?;
        if step.is_some() {
            self.cancel_reveal();
        }
        Ok(step)
    }

    // ========================================================================
    // Summary
    // ========================================================================

    pub fn toggle_detailed(&mut self) {
        if self.session.analysis().is_some() && self.session.kind() == ScreenKind::Summary {
            self.show_detailed = !self.show_detailed;
            self.detailed_scroll = 0;
        }
    }

    /// Scroll the extensive summary by `delta` rows, within what the last
    /// frame had to show
    pub fn scroll_detailed(&mut self, delta: i32) {
        let max = i32::from(self.detailed_max_scroll.get());
        let next = (i32::from(self.detailed_scroll) + delta).clamp(0, max);
        self.detailed_scroll = u16::try_from(next).unwrap_or(0);
    }

    /// Called by the renderer with the overflow of the overlay; returns the
    /// offset to draw at
    pub fn detailed_scroll_within(&self, max: u16) -> u16 {
        self.detailed_max_scroll.set(max);
        self.detailed_scroll.min(max)
    }

    /// Back to an empty intake screen from anywhere
    pub fn reset(&mut self) {
        self.cancel_reveal();
        self.session.reset();
        self.show_detailed = false;
        self.detailed_scroll = 0;
        self.loading_since = None;
        self.file_browser.close();
    }

    fn cancel_reveal(&mut self) {
        if let Some(task) = self.reveal_task.take() {
            task.abort();
        }
    }

    // ========================================================================
    // Command handling
    // ========================================================================

    /// Apply everything background tasks have sent since the last tick
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.handle_command(command);
        }
    }

    /// Wait for the next command and apply it
    pub async fn process_next_command(&mut self) -> bool {
        match self.command_rx.recv().await {
            Some(command) => {
                self.handle_command(command);
                true
            }
            None => false,
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::AnalysisFinished { ticket, outcome } => {
                if self.session.finish_submit(ticket, outcome) {
                    self.loading_since = None;
                }
            }
            AppCommand::RevealExplanation(ticket) => {
                if self.session.reveal_explanation(ticket) {
                    self.reveal_task = None;
                }
            }
        }
    }

    // ========================================================================
    // Animation
    // ========================================================================

    pub fn tick(&mut self) {
        if self.session.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
        self.notifications.cleanup_expired();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame]
    }

    pub fn loading_seconds(&self) -> Option<u64> {
        self.loading_since.map(|start| start.elapsed().as_secs())
    }
}
