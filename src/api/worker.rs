//! Fetch worker thread
//!
//! Runs endpoint requests in a background thread so the UI event loop never
//! blocks. Receives requests via channel and sends tagged responses back to
//! the main thread, which matches them against the latest issued request id
//! and discards stale ones.

use std::sync::mpsc::{Receiver, Sender};

use super::client::{ApiClient, ApiError};
use super::models::ImageRecord;

/// Request messages sent to the fetch worker
#[derive(Debug)]
pub enum FetchRequest {
    /// Look up city-name suggestions for a partial query
    Suggestions { query: String, request_id: u64 },
    /// Search images for a full phrase
    Images { query: String, request_id: u64 },
}

/// Response messages received from the fetch worker
///
/// Each response carries the id of the request that produced it so the
/// owning controller can tell current results from stale ones.
#[derive(Debug)]
pub enum FetchResponse {
    Suggestions {
        result: Result<Vec<String>, ApiError>,
        request_id: u64,
    },
    Images {
        result: Result<Vec<ImageRecord>, ApiError>,
        request_id: u64,
    },
}

/// Spawn the fetch worker thread
///
/// The worker owns a current-thread tokio runtime for the HTTP client and
/// processes requests until the request channel is closed.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || worker_loop(client, request_rx, response_tx));
}

fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to start fetch runtime: {e}");
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            FetchRequest::Suggestions { query, request_id } => {
                let result = runtime.block_on(client.suggestions(&query));
                FetchResponse::Suggestions { result, request_id }
            }
            FetchRequest::Images { query, request_id } => {
                let result = runtime.block_on(client.images(&query));
                FetchResponse::Images { result, request_id }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            break;
        }
    }

    log::debug!("fetch worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
