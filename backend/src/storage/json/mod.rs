//! # JSON Collection Storage
//!
//! File-based storage with one pretty-printed JSON array per collection.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── activities.json
//! ├── staff.json
//! └── dailyUpdates.json
//! ```
//!
//! ## Layers
//!
//! - [`DurableCollection`]: whole-file load/save of one collection
//! - [`RecordCollection`]: in-memory snapshot with an id index and the
//!   per-collection writer lock
//! - [`JsonConnection`]: owns the three collections of a data directory

pub mod connection;
pub mod durable_collection;
pub mod record_collection;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use durable_collection::DurableCollection;
pub use record_collection::RecordCollection;
