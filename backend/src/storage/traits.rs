//! # Storage Traits
//!
//! Abstractions shared by every collection regardless of the record kind it
//! holds.

use serde::{de::DeserializeOwned, Serialize};

/// A record that can be kept in a durable collection.
///
/// Records are identified by a string id that is unique within their
/// collection for the record's whole lifetime.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name used in log lines and error messages
    const COLLECTION: &'static str;

    /// Unique id of this record within its collection
    fn id(&self) -> &str;
}
