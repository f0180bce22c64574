//! Breakdown screen: executive summary and the reality-check cards

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let Some(analysis) = app.session.analysis() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let summary = Paragraph::new(Line::from(Span::styled(
        format!("\"{}\"", analysis.summary),
        Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(
                " ● EXECUTIVE SUMMARY ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(
                Line::from(Span::styled(
                    decoded_label(app),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
            ),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(summary, chunks[0]);

    let mut lines = Vec::new();
    for card in &analysis.impact_cards {
        lines.push(Line::from(vec![
            Span::raw(format!("{}  ", card.icon)),
            Span::styled(
                card.title.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.category.as_str().to_uppercase()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", card.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let cards = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " REALITY CHECK ",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(cards, chunks[1]);

    let button = Paragraph::new("ENTER THE ARENA 🏃💨")
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);
}

fn decoded_label(app: &App) -> String {
    match app.session.analyzed_at() {
        Some(at) => format!(" DECODED AT {} ", at.format("%H:%M")),
        None => String::new(),
    }
}
