//! # Storage Module
//!
//! Handles all data persistence for the daycare activity log.
//!
//! Each record kind lives in its own named collection: one JSON file per
//! collection inside the configured data directory. Collections are loaded
//! once, served from memory, and written back in full on every change.
//!
//! ## Durability
//!
//! - Every save writes a sibling temp file, syncs it, then renames it over the
//!   collection file, so a failed write never leaves a half-written collection
//! - A missing collection file is created as an empty collection on first use
//!
//! ## Concurrency
//!
//! - Mutations on one collection are serialized by a per-collection writer lock
//! - Readers work on immutable snapshots and never wait on disk I/O
//! - Activities, staff and daily updates are independent of each other

pub mod error;
pub mod json;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use json::{DurableCollection, JsonConnection, RecordCollection};
pub use traits::Record;
