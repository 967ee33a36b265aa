//! Service layer for business logic.
//!
//! This module contains services that coordinate the color model with
//! persistence: the key-value store and the picker session built on it.

pub mod session;
pub mod store;

// Re-export commonly used types and functions
pub use session::Session;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
