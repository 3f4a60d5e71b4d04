//! Suggestion dropdown event handling
//!
//! Keyboard navigation and mouse routing for the dropdown. Accepting an
//! entry copies it into the input field, hides the dropdown, and submits
//! the search.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::layout::Region;

/// Handle a key press while the dropdown is visible
///
/// Returns true if the key was consumed, false if it should fall through
/// to the input field.
pub fn handle_dropdown_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.suggest.is_visible() {
        return false;
    }

    match key.code {
        KeyCode::Down => {
            app.suggest.select_next();
            true
        }
        KeyCode::Up => {
            app.suggest.select_prev();
            true
        }
        KeyCode::Enter => {
            if let Some(city) = app.suggest.selected_city().map(str::to_string) {
                accept(app, city);
            }
            true
        }
        KeyCode::Esc => {
            app.suggest.hide();
            true
        }
        _ => false,
    }
}

/// Route a left click through the last rendered layout
///
/// A click on a dropdown entry accepts it; a click anywhere outside both
/// the input field and the dropdown hides the dropdown.
pub fn handle_mouse_click(app: &mut App, column: u16, row: u16) {
    match app.regions.region_at(column, row) {
        Some(Region::Dropdown) => {
            if let Some(index) = app.regions.dropdown_index(row)
                && let Some(city) = app.suggest.items().get(index).cloned()
            {
                accept(app, city);
            }
        }
        Some(Region::InputField) => {}
        _ => app.suggest.hide(),
    }
}

fn accept(app: &mut App, city: String) {
    app.input.set_value(&city);
    app.suggest.hide();
    app.suggest.debounce.cancel();
    app.submit(city);
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
