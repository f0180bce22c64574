//! Quiz screen: progress, stage badge, options and the explanation panel

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::quiz::{next_label, option_letter, stage_title, verdict, QuizEngine};

fn stage_color(index: usize) -> Color {
    match index {
        0 => Color::Blue,
        1 => Color::LightRed,
        2 => Color::Magenta,
        _ => Color::Cyan,
    }
}

pub fn render_quiz(f: &mut Frame, area: Rect, app: &App) {
    let Some(quiz) = app.session.quiz() else {
        return;
    };
    let Some(question) = quiz.current_question() else {
        return;
    };

    let panel_height = if quiz.explanation_visible() { 7 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(panel_height),
        ])
        .split(area);

    render_progress(f, chunks[0], quiz);

    let index = quiz.current_index();
    let badge = Paragraph::new(Span::styled(
        format!("● {}", stage_title(index)),
        Style::default()
            .fg(stage_color(index))
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(badge, chunks[1]);

    let prompt = Paragraph::new(Span::styled(
        question.question.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[2]);

    let selected = quiz.selected();
    let options: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match selected {
                None => Style::default(),
                Some(_) if question.is_correct(i) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(s) if s == i => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
                Some(_) => Style::default().fg(Color::DarkGray),
            };
            let marker = if selected == Some(i) { "▶" } else { " " };
            Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(
                    format!("[{}] ", option_letter(i)),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(option.clone(), style),
            ])
        })
        .collect();

    let option_list = Paragraph::new(options)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(option_list, chunks[3]);

    if quiz.explanation_visible() {
        render_explanation(f, chunks[4], quiz, &question.explanation);
    }
}

fn render_progress(f: &mut Frame, area: Rect, quiz: &QuizEngine) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(quiz.progress().clamp(0.0, 1.0))
        .label(format!("{}/{}", quiz.current_index() + 1, quiz.total()));
    f.render_widget(gauge, row[0]);

    let streak = Paragraph::new(Span::styled(
        format!("🔥 {}", quiz.score()),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(streak, row[1]);
}

fn render_explanation(f: &mut Frame, area: Rect, quiz: &QuizEngine, explanation: &str) {
    let correct = quiz.answered_correctly().unwrap_or(false);
    let (color, icon) = if correct {
        (Color::Green, "✅")
    } else {
        (Color::Red, "❌")
    };

    let text = vec![
        Line::from(Span::styled(
            format!("{} {}", icon, verdict(correct).to_uppercase()),
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", explanation),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                next_label(quiz.is_last_question()),
                Style::default()
                    .fg(Color::White)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
