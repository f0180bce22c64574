//! Intake screen: paste text or attach a scan, then decode

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::wrap_rows;
use crate::app::App;

pub fn render_intake(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let banner_height = if session.error().is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Knowledge is your ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "Shield.",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        ]),
        Line::from(Span::styled(
            "Paste a section or upload a scan/PDF. We'll decode the legalese for you.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(heading, chunks[0]);

    if let Some(message) = session.error() {
        let banner = Paragraph::new(message)
            .style(Style::default().fg(Color::White).bg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(banner, chunks[1]);
    }

    render_text_input(f, chunks[2], app);
    render_attachment(f, chunks[3], app);
    render_decode_button(f, chunks[4], app);
}

fn render_text_input(f: &mut Frame, area: Rect, app: &App) {
    let draft = app.session.draft();
    let editable = !app.session.is_loading() && !app.file_browser.visible;

    let width = area.width.saturating_sub(2) as usize;
    let mut rows = wrap_rows(&draft.text, width);
    if editable && rows.last().is_some_and(|row| row.chars().count() >= width) {
        rows.push(String::new());
    }

    // Keep the tail of long pastes and the cursor in view
    let visible = (area.height.saturating_sub(2) as usize).max(1);
    let skip = rows.len().saturating_sub(visible);
    let last = rows.len().saturating_sub(1);

    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .skip(skip)
        .map(|(i, row)| {
            let mut line = Line::from(row);
            if i == last {
                if editable {
                    line.spans.push(Span::styled("█", Style::default().fg(Color::Green)));
                }
                if draft.text.is_empty() {
                    line.spans.push(Span::styled(
                        "Paste text here or upload a file below...",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            line
        })
        .collect();

    let border = if editable { Color::Green } else { Color::DarkGray };
    let input = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" Bill text ({} chars) ", draft.text.chars().count())),
    );
    f.render_widget(input, area);
}

fn render_attachment(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);

    let content = match &app.session.draft().document {
        Some(document) => Paragraph::new(vec![
            Line::from(vec![
                Span::raw("📄 "),
                Span::styled(
                    document.file_name.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} · {} KB", document.kind, document.len().div_ceil(1024)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                "DOCUMENT LOCKED & LOADED",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("[Ctrl+X]", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" CHANGE FILE", Style::default().fg(Color::Red)),
            ]),
        ])
        .block(block.border_style(Style::default().fg(Color::Green))),
        None => Paragraph::new(vec![
            Line::from(vec![
                Span::raw("📄 "),
                Span::styled("SCAN OR UPLOAD PDF", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled("[Tab]", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" browse"),
            ]),
            Line::from(Span::styled(
                "MAX 10MB • JPG, PNG, PDF",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block.border_style(Style::default().fg(Color::DarkGray))),
    };

    f.render_widget(content.alignment(Alignment::Center), area);
}

fn render_decode_button(f: &mut Frame, area: Rect, app: &App) {
    let (label, style) = if app.session.is_loading() {
        let elapsed = app.loading_seconds().unwrap_or(0);
        (
            format!("{} CRUNCHING DATA... ({}s)", app.spinner_char(), elapsed),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    } else if app.session.can_submit() {
        (
            "DECODE BILL".to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("DECODE BILL".to_string(), Style::default().fg(Color::DarkGray))
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}
