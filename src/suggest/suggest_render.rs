//! Suggestion dropdown rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

// Dropdown display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MIN_DROPDOWN_WIDTH: u16 = 18;
const MAX_DROPDOWN_WIDTH: u16 = 48;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const DROPDOWN_PADDING: u16 = 6;
const DROPDOWN_OFFSET_X: u16 = 1;

/// Render the dropdown anchored below the input field
///
/// Records the rendered area in the layout regions so mouse clicks can be
/// resolved against it.
pub fn render_dropdown(app: &mut App, frame: &mut Frame) {
    let items = app.suggest.items();
    if items.is_empty() {
        return;
    }

    let visible_count = items.len().min(MAX_VISIBLE_SUGGESTIONS);
    let height = visible_count as u16 + DROPDOWN_BORDER_HEIGHT;
    let width = dropdown_width(items);

    let area = popup::popup_below_anchor(
        app.regions.input,
        width,
        height,
        DROPDOWN_OFFSET_X,
        frame.area(),
    );

    let list_items: Vec<ListItem> = items
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, city)| {
            let line = if i == app.suggest.selected_index() {
                Line::from(Span::styled(
                    format!("► {city}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {city}"),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    popup::clear_area(frame, area);
    frame.render_widget(list, area);

    app.regions.dropdown = Some(area);
}

fn dropdown_width(items: &[String]) -> u16 {
    let max_text_width = items
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|city| city.as_str().width())
        .max()
        .unwrap_or(0) as u16;

    (max_text_width + DROPDOWN_PADDING).clamp(MIN_DROPDOWN_WIDTH, MAX_DROPDOWN_WIDTH)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
