//! UI rendering for the Mzalendo Lens TUI
//!
//! One renderer per screen plus the shell around them. Renderers only read
//! from [`App`]; every state change goes through the app and session.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::session::ScreenKind;

mod breakdown_view;
mod components;
mod header_footer;
mod intake_view;
mod notifications;
mod quiz_view;
mod summary_view;

pub use breakdown_view::render_breakdown;
pub use components::{centered_rect, render_file_browser, wrap_rows};
pub use header_footer::{render_footer, render_header};
pub use intake_view::render_intake;
pub use notifications::render_notifications;
pub use quiz_view::render_quiz;
pub use summary_view::{render_detailed_summary, render_summary};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, chunks[0], app);

    match app.session.kind() {
        ScreenKind::Intake => render_intake(f, chunks[1], app),
        ScreenKind::Breakdown => render_breakdown(f, chunks[1], app),
        ScreenKind::Quiz => render_quiz(f, chunks[1], app),
        ScreenKind::Summary => render_summary(f, chunks[1], app),
    }

    render_footer(f, chunks[2], app);

    // Overlays
    if app.show_detailed {
        render_detailed_summary(f, area, app);
    }
    if app.file_browser.visible {
        render_file_browser(f, chunks[1], app);
    }
    render_notifications(f, app, chunks[1]);
}
