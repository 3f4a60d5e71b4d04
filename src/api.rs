//! HTTP boundary to the weather app server
//!
//! The client wraps the two JSON endpoints the page consumes; the worker
//! runs them on a background thread so the UI loop never blocks.

mod client;
mod models;
mod worker;

pub use client::{ApiClient, ApiError};
pub use models::ImageRecord;
pub use worker::{FetchRequest, FetchResponse, spawn_worker};
