//! Router configuration for the HTTP API.
//!
//! This module sets up the fixed route table, middleware (CORS, request
//! tracing), and creates the axum router ready for serving. Routing is
//! static: no path parameters, no wildcard matching.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/entry",
            post(handlers::create_entry)
                .delete(handlers::delete_entry)
                // Any other method gets the fixed 405 text, not axum's
                // bodyless default.
                .fallback(handlers::entry_method_not_allowed),
        )
        .route("/entriesfn", get(handlers::list_by_forename))
        .route("/entriessn", get(handlers::list_by_surname))
        .route("/search", post(handlers::search_entries))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EntryStore, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let store = Arc::new(MemoryStore::new()) as Arc<dyn EntryStore>;
        let state = AppState::new(store);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
