use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::api::FetchRequest;
use crate::suggest;

use super::state::App;

impl App {
    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: exit without submitting
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Dropdown navigation takes priority while it is visible
        if suggest::handle_dropdown_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                let city = self.query().trim().to_string();
                if !city.is_empty() {
                    self.submit(city);
                }
            }
            _ => {
                // Feed the input field; only an actual edit counts as an
                // input change for the suggestion controller
                if self.input.textarea.input(key) {
                    let value = self.query().to_string();
                    self.suggest.input_changed(&value, now);
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            suggest::handle_mouse_click(self, mouse.column, mouse.row);
        }
    }

    /// Advance timers and apply worker responses
    ///
    /// Runs every event-loop iteration: issues the suggestion request whose
    /// idle window elapsed, routes fetch responses to their controller, and
    /// rotates the showcase.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some((query, request_id)) = self.suggest.poll_due_query(now) {
            self.send_request(FetchRequest::Suggestions { query, request_id });
        }

        for response in self.drain_responses() {
            match response {
                crate::api::FetchResponse::Suggestions { result, request_id } => {
                    self.suggest.apply_response(request_id, result);
                }
                crate::api::FetchResponse::Images { result, request_id } => {
                    self.slider.apply_response(request_id, result, now);
                }
            }
        }

        self.slider.on_tick(now);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
