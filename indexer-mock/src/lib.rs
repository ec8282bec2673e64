//! Algorand Indexer Mock Server Library
//!
//! This crate provides both a standalone binary and library components
//! for serving the Algorand indexer API from in-memory fixtures.

pub mod handlers;
pub mod server;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use server::{create_router, run_server, spawn_server};
pub use store::IndexerStore;
pub use types::*;
