use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below an anchor, flipping above it when there is
/// not enough room underneath.
pub fn popup_below_anchor(
    anchor: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
    frame_area: Rect,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let below = anchor.y + anchor.height;
    let popup_y = if below + height <= frame_area.height {
        below
    } else {
        anchor.y.saturating_sub(height)
    };

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.width.saturating_sub(popup_x)),
        height: height.min(frame_area.height.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
