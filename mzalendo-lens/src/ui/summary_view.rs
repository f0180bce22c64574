//! Summary screen and the extensive-summary overlay

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, wrap_rows};
use crate::app::App;
use crate::quiz::outcome_copy;

pub fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let Some(score) = app.session.final_score() else {
        return;
    };
    let (badge, headline, message) = outcome_copy(&score);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let text = vec![
        Line::from(""),
        Line::from(Span::raw(badge)),
        Line::from(vec![
            Span::styled("SCORE ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ];
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(body, chunks[0]);

    let again = Paragraph::new("[R] ANALYZE ANOTHER BILL")
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(again, chunks[1]);

    let detailed = Paragraph::new("[D] READ EXTENSIVE SUMMARY")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(detailed, chunks[2]);
}

/// The model's detailed summary, verbatim
pub fn render_detailed_summary(f: &mut Frame, area: Rect, app: &App) {
    let Some(analysis) = app.session.analysis() else {
        return;
    };
    let popup = centered_rect(80, 80, area);
    let width = popup.width.saturating_sub(2) as usize;
    let height = popup.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = wrap_rows(&analysis.detailed_summary, width)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] GOT IT, LOUD AND CLEAR",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let overflow = u16::try_from(lines.len().saturating_sub(height)).unwrap_or(u16::MAX);
    let scroll = app.detailed_scroll_within(overflow);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " EXTENSIVE INTEL ",
            Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ))
        .style(Style::default().bg(Color::Black));
    if overflow > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} ", scroll, overflow),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        );
    }

    let overlay = Paragraph::new(lines).block(block).scroll((scroll, 0));

    f.render_widget(Clear, popup);
    f.render_widget(overlay, popup);
}
