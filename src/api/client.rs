use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::VibesError;

use super::models::ImageRecord;

/// Errors from the suggestions and image-search endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Server returned a non-success status
    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the weather app's JSON endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client for the given server base URL
    pub fn new(server: &str) -> Result<Self, VibesError> {
        let base = Url::parse(server).map_err(|e| VibesError::InvalidServerUrl {
            url: server.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    /// City-name suggestions for a partial query
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("api/suggestions")?;
        self.get_json(url, &[("q", query)]).await
    }

    /// Image search results for a full search phrase
    pub async fn images(&self, query: &str) -> Result<Vec<ImageRecord>, ApiError> {
        let url = self.endpoint("api/images")?;
        self.get_json(url, &[("query", query)]).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let res = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Api {
                code: status.as_u16(),
                message: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
