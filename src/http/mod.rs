//! HTTP server module for the phonebook backend.
//!
//! This module provides an axum-based HTTP server that exposes the entry
//! store as a small REST-ish API: create and delete entries, list them
//! sorted by forename or surname, and substring-search them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Content-type precondition and JSON decoding            │
//! │  - Response encoding, error mapping                       │
//! │  - CORS, request tracing                                  │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Storage Layer (store/)                                   │
//! │  - EntryStore trait                                       │
//! │  - MemoryStore (lock-protected Vec)                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Each handler performs exactly one store operation; the store's lock is
//! taken inside that operation and never spans request parsing or response
//! encoding.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
