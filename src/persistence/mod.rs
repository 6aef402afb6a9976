//! Employee collection persistence
//!
//! Features:
//! - Full-collection JSON blob under a single key
//! - Seed fetch on first run, persisted immediately
//! - LocalStorage backend on web, in-memory backend elsewhere

pub mod repository;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use repository::EmployeeRepository;
pub use store::{KeyValueStore, MemoryStore};
