//! Tests for the image showcase state

use super::*;
use proptest::prelude::*;
use std::time::Duration;

const ROTATE_MS: u64 = 5000;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn state() -> SliderState {
    SliderState::new(ROTATE_MS)
}

fn record(n: usize) -> ImageRecord {
    ImageRecord {
        url: format!("https://images.unsplash.com/photo-{n}"),
        alt: format!("Skyline {n}"),
        credit: format!("Photographer {n}"),
        credit_url: format!("https://unsplash.com/@photographer{n}"),
    }
}

fn records(count: usize) -> Vec<ImageRecord> {
    (0..count).map(record).collect()
}

fn network_error() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

#[test]
fn test_search_query_appends_qualifier() {
    assert_eq!(search_query("Paris"), "Paris skyline");
    assert_eq!(search_query("Nature landscape"), "Nature landscape skyline");
}

#[test]
fn test_install_renders_slides_with_first_active() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Ok(records(3)), start);

    assert_eq!(slider.slides().len(), 3);
    assert_eq!(slider.active_index(), 0);
    assert!(!slider.is_fallback());
    assert!(slider.rotation.is_armed());
}

#[test]
fn test_rotation_cycles_through_slides() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Ok(records(3)), start);

    slider.on_tick(start + ms(5000));
    assert_eq!(slider.active_index(), 1);
    slider.on_tick(start + ms(10_000));
    assert_eq!(slider.active_index(), 2);
    slider.on_tick(start + ms(15_000));
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn test_single_slide_never_arms_rotation() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Ok(records(1)), start);

    assert_eq!(slider.slides().len(), 1);
    assert!(!slider.rotation.is_armed());

    slider.on_tick(start + ms(60_000));
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn test_empty_response_renders_fallback_without_timer() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Ok(vec![]), start);

    assert!(slider.is_fallback());
    assert!(slider.slides().is_empty());
    assert!(!slider.rotation.is_armed());
}

#[test]
fn test_error_response_renders_fallback_without_timer() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Err(network_error()), start);

    assert!(slider.is_fallback());
    assert!(!slider.rotation.is_armed());
}

#[test]
fn test_refetch_replaces_slides_and_timer() {
    let mut slider = state();
    let start = Instant::now();

    let first = slider.begin_fetch();
    slider.apply_response(first, Ok(records(3)), start);
    slider.on_tick(start + ms(5000));
    assert_eq!(slider.active_index(), 1);

    let second = slider.begin_fetch();
    slider.apply_response(second, Ok(records(2)), start + ms(6000));

    // The old set is fully gone and rotation restarted from the new install
    assert_eq!(slider.slides().len(), 2);
    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.slides()[0].alt, "Skyline 0");

    slider.on_tick(start + ms(10_000));
    assert_eq!(slider.active_index(), 0);
    slider.on_tick(start + ms(11_000));
    assert_eq!(slider.active_index(), 1);
}

#[test]
fn test_stale_response_is_discarded_after_refetch() {
    let mut slider = state();
    let start = Instant::now();

    let stale = slider.begin_fetch();
    let latest = slider.begin_fetch();

    slider.apply_response(latest, Ok(records(2)), start);
    slider.apply_response(stale, Ok(records(5)), start + ms(100));

    assert_eq!(slider.slides().len(), 2);
    assert!(slider.rotation.is_armed());
}

#[test]
fn test_stale_error_does_not_clobber_latest_slides() {
    let mut slider = state();
    let start = Instant::now();

    let stale = slider.begin_fetch();
    let latest = slider.begin_fetch();

    slider.apply_response(latest, Ok(records(2)), start);
    slider.apply_response(stale, Err(network_error()), start + ms(100));

    assert!(!slider.is_fallback());
    assert_eq!(slider.slides().len(), 2);
}

#[test]
fn test_slide_links_carry_tracking_params() {
    let mut slider = state();
    let start = Instant::now();

    let request_id = slider.begin_fetch();
    slider.apply_response(request_id, Ok(records(1)), start);

    let slide = slider.active_slide().unwrap();
    assert_eq!(
        slide.credit_link,
        "https://unsplash.com/@photographer0?utm_source=weather_app&utm_medium=referral"
    );
    assert_eq!(
        slide.source_link,
        "https://unsplash.com/?utm_source=weather_app&utm_medium=referral"
    );
}

#[test]
fn test_tracking_params_append_to_existing_query() {
    assert_eq!(
        with_tracking("https://example.test/p?ref=1"),
        "https://example.test/p?ref=1&utm_source=weather_app&utm_medium=referral"
    );
}

// For any slide count n >= 2 and any number of elapsed intervals k, the
// active index is k mod n and only one slide is ever active.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_active_index_is_tick_count_mod_len(
        slide_count in 2usize..8,
        ticks in 0u64..40,
    ) {
        let mut slider = state();
        let start = Instant::now();

        let request_id = slider.begin_fetch();
        slider.apply_response(request_id, Ok(records(slide_count)), start);

        for k in 1..=ticks {
            slider.on_tick(start + ms(k * ROTATE_MS));
        }

        prop_assert_eq!(slider.active_index(), (ticks as usize) % slide_count);
        prop_assert!(slider.active_slide().is_some());
    }

    #[test]
    fn prop_refetch_leaves_exactly_one_slide_set(fetches in 2usize..6) {
        let mut slider = state();
        let start = Instant::now();

        let mut latest_id = 0;
        for _ in 0..fetches {
            latest_id = slider.begin_fetch();
        }

        // Only the latest response installs; all earlier ones are stale
        for id in 1..=latest_id {
            slider.apply_response(id, Ok(records(id as usize)), start);
        }

        prop_assert_eq!(slider.slides().len(), latest_id as usize);
        prop_assert_eq!(slider.latest_request_id(), latest_id);
    }
}
