//! Toast rendering along the bottom of the body area

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};

const MAX_VISIBLE: usize = 3;

pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let notifications = app.notifications.get_active();
    if notifications.is_empty() {
        return;
    }

    let shown = notifications.len().min(MAX_VISIBLE);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length((shown * 3) as u16)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); shown])
        .split(chunks[1]);

    for (idx, notification) in notifications.iter().take(shown).enumerate() {
        let (bg_color, fg_color, icon) = match notification.level {
            NotificationLevel::Error => (Color::Red, Color::White, "✗"),
            NotificationLevel::Warning => (Color::Yellow, Color::Black, "⚠"),
            NotificationLevel::Info => (Color::Blue, Color::White, "ℹ"),
            NotificationLevel::Success => (Color::Green, Color::White, "✓"),
        };

        let text = Line::from(vec![
            Span::styled(
                format!(" {} {} ", icon, notification.title),
                Style::default()
                    .fg(fg_color)
                    .bg(bg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(notification.message.clone()),
        ]);

        let toast = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(bg_color)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, rows[idx]);
        f.render_widget(toast, rows[idx]);
    }
}
