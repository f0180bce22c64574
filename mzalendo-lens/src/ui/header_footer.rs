//! Header and footer rendering functions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::session::ScreenKind;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            " M ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("Mzalendo Lens", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  CIVIC LITERACY", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(brand, halves[0]);

    let phase = Paragraph::new(Span::styled(
        app.session.phase_label(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    f.render_widget(phase, halves[1]);
}

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::default().add_modifier(Modifier::BOLD))
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.file_browser.visible {
        Line::from(vec![
            key("TYPE"),
            Span::raw(" to search  "),
            key("[↑↓]"),
            Span::raw(" Navigate  "),
            key("[Enter]"),
            Span::raw(" Open/Attach  "),
            key("[Esc]"),
            Span::raw(" Close"),
        ])
    } else if app.show_detailed {
        Line::from(vec![
            key("[↑↓/PgUp/PgDn]"),
            Span::raw(" Scroll  "),
            key("[Esc/Enter]"),
            Span::raw(" Got it, loud and clear"),
        ])
    } else {
        match app.session.kind() {
            ScreenKind::Intake => Line::from(vec![
                key("TYPE/PASTE"),
                Span::raw(" Bill text  "),
                key("[Tab]"),
                Span::raw(" Attach file  "),
                key("[Ctrl+X]"),
                Span::raw(" Remove file  "),
                key("[Enter]"),
                Span::raw(" Decode  "),
                key("[Ctrl+Q]"),
                Span::raw(" Quit"),
            ]),
            ScreenKind::Breakdown => Line::from(vec![
                key("[Enter]"),
                Span::raw(" Enter the arena  "),
                key("[Esc]"),
                Span::raw(" Start over  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
            ScreenKind::Quiz => Line::from(vec![
                key("[A-D/1-4]"),
                Span::raw(" Answer  "),
                key("[Enter]"),
                Span::raw(" Next  "),
                key("[Esc]"),
                Span::raw(" Abandon  "),
                key("[Ctrl+Q]"),
                Span::raw(" Quit"),
            ]),
            ScreenKind::Summary => Line::from(vec![
                key("[R]"),
                Span::raw(" Analyze another bill  "),
                key("[D]"),
                Span::raw(" Extensive summary  "),
                key("[Q]"),
                Span::raw(" Quit"),
            ]),
        }
    };

    let footer = Paragraph::new(footer_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(
                Line::from(Span::styled(
                    " Powering the next generation of informed Kenyans. ",
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
            ),
    );
    f.render_widget(footer, area);
}
