//! HTTP handlers for the phonebook API.
//!
//! Each handler corresponds to one endpoint and performs exactly one store
//! operation. Request decoding happens in the [`StrictJson`] extractor
//! before the handler body runs, so the handlers themselves are
//! infallible.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use tracing::{debug, info};

use super::dto::{DeleteEntryRequest, Entry, HealthResponse, SearchRequest};
use super::extract::StrictJson;
use super::state::AppState;
use crate::store::SortKey;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the current entry count.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: state.store.len().await,
    })
}

// =============================================================================
// Entry Management
// =============================================================================

/// POST /entry
///
/// Append a new entry to the store. Duplicates are allowed; the response
/// is an empty 200 with no confirmation body.
pub async fn create_entry(
    State(state): State<AppState>,
    StrictJson(entry): StrictJson<Entry>,
) -> StatusCode {
    info!(
        forename = %entry.forename,
        surname = %entry.surname,
        phone_number = entry.phone_number,
        "entry created"
    );
    state.store.append(entry).await;
    StatusCode::OK
}

/// DELETE /entry
///
/// Remove every entry whose forename and surname both match. Always
/// responds 200, whether or not anything was removed; the empty response
/// carries a json content-type header.
pub async fn delete_entry(
    State(state): State<AppState>,
    StrictJson(request): StrictJson<DeleteEntryRequest>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    let removed = state
        .store
        .delete_matching(&request.forename, &request.surname)
        .await;
    debug!(
        forename = %request.forename,
        surname = %request.surname,
        removed,
        "entries deleted"
    );
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")])
}

/// Fallback for any other method on /entry.
pub async fn entry_method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

// =============================================================================
// Listing & Search
// =============================================================================

/// GET /entriesfn
///
/// List all entries sorted ascending by forename, stable on ties.
pub async fn list_by_forename(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.store.sorted_by(SortKey::Forename).await)
}

/// GET /entriessn
///
/// List all entries sorted ascending by surname, stable on ties.
pub async fn list_by_surname(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.store.sorted_by(SortKey::Surname).await)
}

/// POST /search
///
/// Return all entries whose forename or surname contains the search term.
/// An entry matching in both fields appears twice in the result.
pub async fn search_entries(
    State(state): State<AppState>,
    StrictJson(request): StrictJson<SearchRequest>,
) -> Json<Vec<Entry>> {
    Json(state.store.search(&request.search_term).await)
}
