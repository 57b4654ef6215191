//! Whole-file persistence for a single collection.
//!
//! The collection file holds a JSON array of records in insertion order,
//! pretty-printed so that changes stay readable in a diff.

use std::fs::{self, File};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::Record;

/// A named, ordered sequence of records stored as one JSON file
#[derive(Debug)]
pub struct DurableCollection<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> DurableCollection<T> {
    /// Create a handle for the collection stored at `path`.
    ///
    /// Nothing is touched on disk until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Path of the collection file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire collection.
    ///
    /// A missing file is initialised to an empty collection and written out,
    /// so the first load of a fresh data directory succeeds.
    pub fn load(&self) -> StorageResult<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No {} file at {}, initialising empty collection",
                    T::COLLECTION,
                    self.path.display()
                );
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|source| StorageError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrite the stored collection with `records`.
    ///
    /// The new content goes to a temp file next to the collection file, is
    /// synced, and then renamed into place. On failure the previous file is
    /// left as it was.
    pub fn save(&self, records: &[T]) -> StorageResult<()> {
        let mut content =
            serde_json::to_string_pretty(records).map_err(|source| StorageError::Encode {
                collection: T::COLLECTION,
                source,
            })?;
        content.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let temp_path = self.temp_path();
        let written = write_synced(&temp_path, content.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| T::COLLECTION.into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::{note, TestEnvironment, TestNote};

    #[test]
    fn test_load_missing_file_initialises_empty_collection() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let collection = DurableCollection::<TestNote>::new(env.base_path.join("notes.json"));

        let records = collection.load().expect("Failed to load");

        assert!(records.is_empty());
        assert!(collection.path().exists());
        let content = fs::read_to_string(collection.path()).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_save_then_load_round_trip_preserves_order() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let collection = DurableCollection::<TestNote>::new(env.base_path.join("notes.json"));
        let records = vec![note("n3", "third"), note("n1", "first"), note("n2", "second")];

        collection.save(&records).expect("Failed to save");
        let loaded = collection.load().expect("Failed to load");

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_is_human_readable_and_leaves_no_temp_file() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let collection = DurableCollection::<TestNote>::new(env.base_path.join("notes.json"));

        collection.save(&[note("n1", "nap went well")]).expect("Failed to save");

        let content = fs::read_to_string(collection.path()).unwrap();
        assert!(content.contains("\n  {"));
        assert!(content.contains("\"text\": \"nap went well\""));
        assert!(!env.base_path.join("notes.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let collection =
            DurableCollection::<TestNote>::new(env.base_path.join("nested").join("notes.json"));

        collection.save(&[note("n1", "hello")]).expect("Failed to save");

        assert_eq!(collection.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_corrupt_file_reports_decode_error() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let path = env.base_path.join("notes.json");
        fs::write(&path, "[{\"id\": \"n1\",").unwrap();
        let collection = DurableCollection::<TestNote>::new(&path);

        let result = collection.load();

        assert!(matches!(result, Err(StorageError::Decode { .. })));
        // The broken file is left for inspection rather than replaced.
        assert_eq!(fs::read_to_string(&path).unwrap(), "[{\"id\": \"n1\",");
    }

    #[test]
    fn test_failed_save_keeps_previous_contents() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let path = env.base_path.join("notes.json");
        let collection = DurableCollection::<TestNote>::new(&path);
        collection.save(&[note("n1", "kept")]).expect("Failed to save");

        // A directory squatting on the temp file name makes the write fail.
        fs::create_dir(env.base_path.join("notes.json.tmp")).unwrap();
        let result = collection.save(&[note("n2", "lost")]);

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(collection.load().unwrap(), vec![note("n1", "kept")]);
    }
}
