//! Phonebook HTTP Server Binary
//!
//! This is the main entry point for the phonebook API server. It
//! initializes the in-memory store, sets up the HTTP router, and starts
//! serving requests. All entries are lost when the process exits.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin phonebook-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use phonebook::http::{create_router, AppState};
use phonebook::store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting phonebook HTTP server");

    // The store starts empty on every launch; there is no persistence.
    let store = Arc::new(MemoryStore::new());

    // Create application state and router
    let state = AppState::new(store);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server; a failure to bind is fatal.
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
