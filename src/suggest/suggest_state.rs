//! Suggestion dropdown state
//!
//! Owns the debounce window and the staleness token for suggestion
//! requests. Keystrokes feed `input_changed`; the app's tick loop collects
//! due queries via `poll_due_query` and routes worker responses back
//! through `apply_response`.

use std::time::Instant;

use crate::api::ApiError;

use super::debounce::Debouncer;

/// Queries shorter than this never reach the endpoint
pub const MIN_QUERY_LEN: usize = 3;

pub struct SuggestState {
    /// Whether the dropdown is visible
    visible: bool,
    /// City names currently shown, in endpoint order
    items: Vec<String>,
    /// Index of the highlighted entry
    selected: usize,
    /// Idle window between the last keystroke and the request
    pub debounce: Debouncer,
    /// Trimmed query waiting for the idle window to elapse
    pending_query: Option<String>,
    /// Sequence number of the most recently issued request; responses
    /// carrying any other id are stale and discarded
    request_id: u64,
}

impl SuggestState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            visible: false,
            items: Vec::new(),
            selected: 0,
            debounce: Debouncer::new(debounce_ms),
            pending_query: None,
            request_id: 0,
        }
    }

    /// React to an input-field change
    ///
    /// Short queries hide the dropdown and cancel any pending request
    /// trigger immediately; qualifying queries restart the idle window.
    pub fn input_changed(&mut self, value: &str, now: Instant) {
        let query = value.trim();

        if query.chars().count() < MIN_QUERY_LEN {
            self.hide();
            self.pending_query = None;
            self.debounce.cancel();
            return;
        }

        self.pending_query = Some(query.to_string());
        self.debounce.restart(now);
    }

    /// Take the query whose idle window has elapsed, tagged with a fresh
    /// request id
    pub fn poll_due_query(&mut self, now: Instant) -> Option<(String, u64)> {
        if !self.debounce.fire(now) {
            return None;
        }
        let query = self.pending_query.take()?;
        self.request_id += 1;
        Some((query, self.request_id))
    }

    /// Apply a worker response; anything but the latest request id is stale
    pub fn apply_response(&mut self, request_id: u64, result: Result<Vec<String>, ApiError>) {
        if request_id != self.request_id {
            log::debug!(
                "discarding stale suggestion response {request_id} (latest {})",
                self.request_id
            );
            return;
        }

        match result {
            Ok(items) if !items.is_empty() => {
                self.items = items;
                self.selected = 0;
                self.visible = true;
            }
            Ok(_) => self.hide(),
            Err(e) => {
                log::error!("error fetching suggestions: {e}");
                self.hide();
            }
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.items.clear();
        self.selected = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Latest issued request id, for matching responses in tests
    pub fn latest_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
