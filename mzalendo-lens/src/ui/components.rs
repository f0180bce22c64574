//! Reusable UI components (file browser, helpers)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::App;

pub fn render_file_browser(f: &mut Frame, area: Rect, app: &App) {
    let browser = &app.file_browser;
    let popup_area = centered_rect(80, 80, area);

    let visible_rows = popup_area.height.saturating_sub(2) as usize;
    let scroll_offset = browser.selected.saturating_sub(visible_rows.saturating_sub(1));

    let items: Vec<ListItem> = browser
        .filtered()
        .into_iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .filter_map(|(display_idx, item_idx)| {
            let path = browser.items.get(item_idx)?;
            let is_selected = display_idx == browser.selected;
            let is_dir = path.is_dir();

            let icon = if is_dir { "📁" } else { "📄" };
            let name = if browser.is_parent_entry(path) {
                "..".to_string()
            } else {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("?")
                    .to_string()
            };

            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_dir {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            Some(ListItem::new(Line::from(vec![
                Span::raw(if is_selected { "▶ " } else { "  " }),
                Span::raw(format!("{} ", icon)),
                Span::styled(name, style),
            ])))
        })
        .collect();

    let title = if browser.search.is_empty() {
        format!(" Attach PDF/JPG/PNG: {} ", browser.current_dir.display())
    } else {
        format!(" Attach PDF/JPG/PNG [search: {}] ", browser.search)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(list, popup_area);
}

/// Break text into rows of at most `width` chars, one or more per line.
/// Rendering pre-wrapped rows keeps row counts exact for scrolling.
pub fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.trim_end_matches('\r').chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
