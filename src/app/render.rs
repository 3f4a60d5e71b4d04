use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::slider::render_showcase;
use crate::suggest::render_dropdown;

use super::state::App;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let (showcase_area, card_area, input_area, help_area) = if self.city.is_some() {
            let layout = Layout::vertical([
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (layout[0], Some(layout[1]), layout[2], layout[3])
        } else {
            let layout = Layout::vertical([
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (layout[0], None, layout[1], layout[2])
        };

        render_showcase(&self.slider, frame, showcase_area);

        if let (Some(card_area), Some(city)) = (card_area, self.city.as_deref()) {
            render_weather_card(city, frame, card_area);
        }

        frame.render_widget(&self.input.textarea, input_area);
        render_help_line(frame, help_area);

        self.regions.showcase = showcase_area;
        self.regions.input = input_area;
        self.regions.dropdown = None;

        // Drawn last so it overlays the showcase; records its own region
        if self.suggest.is_visible() {
            render_dropdown(self, frame);
        }
    }
}

/// Header card naming the city of the currently displayed weather result
fn render_weather_card(city: &str, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        city,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Weather ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " Enter: search   ↑/↓: choose suggestion   Esc: quit ",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
