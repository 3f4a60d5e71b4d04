use std::sync::mpsc::{Receiver, Sender};

use crate::api::{FetchRequest, FetchResponse};
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::slider::{self, SliderState};
use crate::suggest::SuggestState;

use super::input_state::InputState;

/// Image search seed when the page shows no weather result yet
pub const DEFAULT_IMAGE_QUERY: &str = "Nature landscape";

/// Application state
///
/// Owns the input field, both controllers, the channels to the fetch
/// worker, and the submitted-city outcome handed back to the wrapper.
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub slider: SliderState,
    pub regions: LayoutRegions,
    /// City the weather page is currently showing, if any
    pub city: Option<String>,
    pub should_quit: bool,
    submitted: Option<String>,
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl App {
    /// Wire both controllers and kick off the initial image search
    pub fn new(
        config: &Config,
        city: Option<String>,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        let mut app = Self {
            input: InputState::new(),
            suggest: SuggestState::new(config.suggest.debounce_ms),
            slider: SliderState::new(config.slider.rotate_ms),
            regions: LayoutRegions::default(),
            city,
            should_quit: false,
            submitted: None,
            request_tx,
            response_rx,
        };

        let base = app
            .city
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_QUERY.to_string());
        app.start_image_fetch(&base);

        app
    }

    /// Start an image search for the showcase pane
    pub fn start_image_fetch(&mut self, base: &str) {
        let request_id = self.slider.begin_fetch();
        self.send_request(FetchRequest::Images {
            query: slider::search_query(base),
            request_id,
        });
    }

    pub(crate) fn send_request(&self, request: FetchRequest) {
        if self.request_tx.send(request).is_err() {
            log::error!("fetch worker is gone; dropping request");
        }
    }

    pub(crate) fn drain_responses(&mut self) -> Vec<FetchResponse> {
        let mut responses = Vec::new();
        while let Ok(response) = self.response_rx.try_recv() {
            responses.push(response);
        }
        responses
    }

    /// Record the chosen city and leave the TUI; the wrapper runs the
    /// actual weather search
    pub fn submit(&mut self, city: String) {
        self.submitted = Some(city);
        self.should_quit = true;
    }

    pub fn take_submitted(&mut self) -> Option<String> {
        self.submitted.take()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current input field value
    pub fn query(&self) -> &str {
        self.input.query()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
