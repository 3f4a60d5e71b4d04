//! Showcase pane rendering
//!
//! Pure view of the slider state: the active slide with its attribution
//! and a position indicator, or the static fallback text.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::slider_state::{FALLBACK_TEXT, SOURCE_NAME, SliderState};

pub fn render_showcase(slider: &SliderState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Showcase ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if slider.is_fallback() {
        render_fallback(frame, inner);
        return;
    }

    // Nothing fetched yet: leave the pane empty
    let Some(slide) = slider.active_slide() else {
        return;
    };

    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            slide.alt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(slide.url.clone(), dim)),
        Line::default(),
        Line::from(vec![
            Span::raw("Photo by "),
            Span::styled(slide.credit.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(" on "),
            Span::styled(SOURCE_NAME, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(slide.credit_link.clone(), dim)),
        Line::from(Span::styled(slide.source_link.clone(), dim)),
        Line::default(),
        indicator_line(slider),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn render_fallback(frame: &mut Frame, inner: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            FALLBACK_TEXT,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// One dot per slide, with the active slide filled
fn indicator_line(slider: &SliderState) -> Line<'static> {
    let dots: Vec<Span> = (0..slider.slides().len())
        .map(|i| {
            if i == slider.active_index() {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(dots)
}

#[cfg(test)]
#[path = "slider_render_tests.rs"]
mod slider_render_tests;
