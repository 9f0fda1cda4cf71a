//! Data Transfer Objects for the HTTP API.
//!
//! The [`Entry`] model is its own wire format and is used directly as the
//! create request body and the list/search response element; only the
//! remaining request and response shapes live here.

use serde::{Deserialize, Serialize};

pub use crate::models::Entry;

/// Request body for deleting entries by name.
///
/// Every entry whose forename and surname both match is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEntryRequest {
    /// First name to match.
    pub forename: String,
    /// Last name to match.
    pub surname: String,
}

/// Request body for substring search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-sensitive substring to look for in forename and surname.
    #[serde(rename = "searchterm")]
    pub search_term: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service.
    pub status: String,
    /// Number of entries currently stored.
    pub entries: usize,
}
