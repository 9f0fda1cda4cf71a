//! # Phonebook Backend
//!
//! An in-memory contact directory exposed over HTTP.
//!
//! Clients create, delete, list (sorted by forename or surname), and
//! substring-search contact entries. All entries live in a single
//! lock-protected collection; nothing is persisted across restarts.
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`models`]: The `Entry` domain type, which doubles as the JSON wire format
//! - [`store`]: Storage layer with the `EntryStore` trait and its in-memory implementation
//! - [`http`]: Axum-based HTTP server, request handlers, and error mapping
//!
//! The server binary (`phonebook-server`) wires these together: it builds a
//! store, injects it into the router as shared state, and serves requests on
//! a configurable host/port.

pub mod http;
pub mod models;
pub mod store;
