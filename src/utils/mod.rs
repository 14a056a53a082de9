//! Utility modules: build info and save storage.

pub mod build_info;
pub mod persistence;

pub use persistence::{FileStore, MemoryStore, SaveStore};
