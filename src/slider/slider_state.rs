//! Image showcase state
//!
//! A slide set is installed wholesale from each image-search response and
//! rotated by a single timer. Installing a new set cancels the previous
//! timer and clears the previous slides before anything new is rendered,
//! so no stale slide or second rotation can survive a re-fetch.

use std::time::Instant;

use crate::api::{ApiError, ImageRecord};

use super::rotation::RotationTimer;

/// Fixed qualifier appended to every image search
pub const QUERY_SUFFIX: &str = "skyline";

/// Placeholder shown when no images are available
pub const FALLBACK_TEXT: &str = "Weather Vibes";

/// Name of the image source credited on every slide
pub(crate) const SOURCE_NAME: &str = "Unsplash";

const SOURCE_URL: &str = "https://unsplash.com/";
const TRACKING_PARAMS: &str = "utm_source=weather_app&utm_medium=referral";

/// Full search phrase for a base term
pub fn search_query(base: &str) -> String {
    format!("{base} {QUERY_SUFFIX}")
}

/// One unit of rotating showcase content: the image plus its attribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    pub alt: String,
    pub credit: String,
    /// Photographer link with outbound tracking parameters
    pub credit_link: String,
    /// Image source link with outbound tracking parameters
    pub source_link: String,
}

impl Slide {
    fn from_record(record: ImageRecord) -> Self {
        Self {
            credit_link: with_tracking(&record.credit_url),
            source_link: with_tracking(SOURCE_URL),
            url: record.url,
            alt: record.alt,
            credit: record.credit,
        }
    }
}

fn with_tracking(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{TRACKING_PARAMS}")
}

pub struct SliderState {
    slides: Vec<Slide>,
    /// Index of the single active slide
    active: usize,
    /// Whether the static fallback slide is showing
    fallback: bool,
    pub rotation: RotationTimer,
    /// Sequence number of the most recently issued fetch; responses
    /// carrying any other id are stale and discarded
    request_id: u64,
}

impl SliderState {
    pub fn new(rotate_ms: u64) -> Self {
        Self {
            slides: Vec::new(),
            active: 0,
            fallback: false,
            rotation: RotationTimer::new(rotate_ms),
            request_id: 0,
        }
    }

    /// Register a new fetch and return its request id
    ///
    /// The previous slide set keeps showing until the response arrives,
    /// matching the page behavior where the old slides stay up during a
    /// reload.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_id += 1;
        self.request_id
    }

    /// Apply a worker response; anything but the latest request id is stale
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<Vec<ImageRecord>, ApiError>,
        now: Instant,
    ) {
        if request_id != self.request_id {
            log::debug!(
                "discarding stale image response {request_id} (latest {})",
                self.request_id
            );
            return;
        }

        match result {
            Ok(records) if !records.is_empty() => self.install(records, now),
            Ok(_) => self.install_fallback(),
            Err(e) => {
                log::error!("error fetching images: {e}");
                self.install_fallback();
            }
        }
    }

    fn install(&mut self, records: Vec<ImageRecord>, now: Instant) {
        self.rotation.cancel();
        self.slides = records.into_iter().map(Slide::from_record).collect();
        self.active = 0;
        self.fallback = false;

        // A single slide has nothing to rotate through
        if self.slides.len() > 1 {
            self.rotation.arm(now);
        }
    }

    fn install_fallback(&mut self) {
        self.rotation.cancel();
        self.slides.clear();
        self.active = 0;
        self.fallback = true;
    }

    /// Advance the rotation for every interval that has elapsed
    pub fn on_tick(&mut self, now: Instant) {
        while self.rotation.due(now) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.slides.len() > 1 {
            self.active = (self.active + 1) % self.slides.len();
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.active)
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Latest issued request id, for matching responses in tests
    pub fn latest_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "slider_state_tests.rs"]
mod slider_state_tests;
