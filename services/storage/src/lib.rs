//! Key-Value Bucket Store
//!
//! Persistence abstraction for the Relique demo platform. All demo
//! state lives in a closed set of named logical buckets, each holding
//! one JSON document. The store imposes no schema: callers serialize
//! and deserialize bucket contents themselves (or via [`StoreExt`]).
//!
//! # Modules
//! - `bucket` — Closed enum of logical buckets with stable string keys
//! - `store` — The `Store` trait, typed JSON helpers, error taxonomy
//! - `memory` — Concurrent in-memory implementation
//! - `file` — Whole-map JSON file implementation

pub mod bucket;
pub mod store;
pub mod memory;
pub mod file;

pub use bucket::Bucket;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{Store, StoreExt, StorageError};

/// Crate version constant
pub const VERSION: &str = "0.1.0";
