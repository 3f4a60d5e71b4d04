use serde::Deserialize;

/// One image search result from `/api/images`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    pub url: String,
    pub alt: String,
    pub credit: String,
    pub credit_url: String,
}
