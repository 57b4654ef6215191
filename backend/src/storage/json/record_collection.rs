//! In-memory view of a durable collection with serialized mutations.
//!
//! The current state of a collection is an immutable [`Snapshot`]: the
//! records in insertion order plus an index from id to position. Readers clone
//! the snapshot pointer and work without further locking. Writers take the
//! collection's writer lock, build the next record sequence from the current
//! snapshot, save it durably, and only then publish it as the new snapshot.
//!
//! Two consequences follow:
//!
//! - concurrent mutations queue on the writer lock and never interleave a
//!   load of one with the save of another
//! - a reader sees either the state before a mutation or the state after it;
//!   a failed save publishes nothing

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use super::durable_collection::DurableCollection;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::Record;

struct Snapshot<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Snapshot<T> {
    fn build(records: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.contains_key(record.id()) {
                // Hand-edited files may repeat an id; lookups resolve to the
                // first occurrence.
                warn!(
                    "Duplicate id {} in {} collection at position {}",
                    record.id(),
                    T::COLLECTION,
                    position
                );
                continue;
            }
            index.insert(record.id().to_string(), position);
        }
        Self { records, index }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.records[position])
    }
}

/// A collection of records held in memory and persisted through a
/// [`DurableCollection`]
pub struct RecordCollection<T: Record> {
    durable: DurableCollection<T>,
    current: RwLock<Arc<Snapshot<T>>>,
    writer: Mutex<()>,
}

impl<T: Record> RecordCollection<T> {
    /// Load the collection from storage and build its index
    pub fn open(durable: DurableCollection<T>) -> StorageResult<Self> {
        let records = durable.load()?;
        debug!(
            "Opened {} collection with {} records",
            T::COLLECTION,
            records.len()
        );

        Ok(Self {
            durable,
            current: RwLock::new(Arc::new(Snapshot::build(records))),
            writer: Mutex::new(()),
        })
    }

    fn snapshot(&self) -> Arc<Snapshot<T>> {
        self.current.read().clone()
    }

    /// Number of records currently in the collection
    pub fn len(&self) -> usize {
        self.snapshot().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against a consistent view of all records in insertion order
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let snapshot = self.snapshot();
        f(&snapshot.records)
    }

    /// Clone of all records in insertion order
    pub fn all(&self) -> Vec<T> {
        self.read(|records| records.to_vec())
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<T> {
        self.snapshot().get(id).cloned()
    }

    /// Append a new record and persist the collection.
    ///
    /// Fails with [`StorageError::DuplicateId`] if the id is already taken.
    pub fn insert(&self, record: T) -> StorageResult<T> {
        let _writer = self.writer.lock();
        let base = self.snapshot();

        if base.index.contains_key(record.id()) {
            return Err(StorageError::DuplicateId {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }

        let mut records = base.records.clone();
        records.push(record.clone());
        self.commit(records)?;

        debug!("Inserted {} into {}", record.id(), T::COLLECTION);
        Ok(record)
    }

    /// Apply `change` to the record with the given id and persist the
    /// collection.
    ///
    /// Returns `Ok(None)` without writing anything if no record has that id.
    pub fn update(&self, id: &str, change: impl FnOnce(&mut T)) -> StorageResult<Option<T>> {
        let _writer = self.writer.lock();
        let base = self.snapshot();

        let Some(&position) = base.index.get(id) else {
            return Ok(None);
        };

        let mut records = base.records.clone();
        change(&mut records[position]);
        let updated = records[position].clone();
        self.commit(records)?;

        debug!("Updated {} in {}", id, T::COLLECTION);
        Ok(Some(updated))
    }

    /// Remove every record with the given id and persist the collection.
    ///
    /// Returns `false` without writing anything if no record had that id.
    pub fn remove(&self, id: &str) -> StorageResult<bool> {
        let _writer = self.writer.lock();
        let base = self.snapshot();

        let mut records = base.records.clone();
        let before = records.len();
        records.retain(|record| record.id() != id);

        if records.len() == before {
            return Ok(false);
        }

        self.commit(records)?;

        debug!("Removed {} from {}", id, T::COLLECTION);
        Ok(true)
    }

    // Caller must hold the writer lock.
    fn commit(&self, records: Vec<T>) -> StorageResult<()> {
        self.durable.save(&records)?;
        *self.current.write() = Arc::new(Snapshot::build(records));
        Ok(())
    }
}
