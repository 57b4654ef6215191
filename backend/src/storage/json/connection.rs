use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::durable_collection::DurableCollection;
use super::record_collection::RecordCollection;
use crate::domain::models::{Activity, DailyUpdate, StaffMember};
use crate::storage::error::{StorageError, StorageResult};

pub const ACTIVITIES_FILE: &str = "activities.json";
pub const STAFF_FILE: &str = "staff.json";
pub const DAILY_UPDATES_FILE: &str = "dailyUpdates.json";

/// JsonConnection owns the three collections stored in one data directory
pub struct JsonConnection {
    base_directory: PathBuf,
    activities: RecordCollection<Activity>,
    staff: RecordCollection<StaffMember>,
    daily_updates: RecordCollection<DailyUpdate>,
}

impl JsonConnection {
    /// Open (and if needed create) the data directory and load every
    /// collection in it
    pub fn new<P: AsRef<Path>>(base_directory: P) -> StorageResult<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();

        if !base_directory.exists() {
            fs::create_dir_all(&base_directory).map_err(|source| StorageError::Io {
                path: base_directory.clone(),
                source,
            })?;
            info!("Created data directory: {}", base_directory.display());
        }

        let activities =
            RecordCollection::open(DurableCollection::new(base_directory.join(ACTIVITIES_FILE)))?;
        let staff = RecordCollection::open(DurableCollection::new(base_directory.join(STAFF_FILE)))?;
        let daily_updates = RecordCollection::open(DurableCollection::new(
            base_directory.join(DAILY_UPDATES_FILE),
        ))?;

        info!(
            "Opened data directory {} ({} activities, {} staff, {} daily updates)",
            base_directory.display(),
            activities.len(),
            staff.len(),
            daily_updates.len()
        );

        Ok(Self {
            base_directory,
            activities,
            staff,
            daily_updates,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn activities(&self) -> &RecordCollection<Activity> {
        &self.activities
    }

    pub fn staff(&self) -> &RecordCollection<StaffMember> {
        &self.staff
    }

    pub fn daily_updates(&self) -> &RecordCollection<DailyUpdate> {
        &self.daily_updates
    }

    /// Run a storage operation on the blocking thread pool.
    ///
    /// Mutations hold the collection's writer lock across a synced file write,
    /// so services call them through here instead of on an async worker.
    pub async fn blocking<R, F>(connection: &Arc<Self>, operation: F) -> StorageResult<R>
    where
        F: FnOnce(&JsonConnection) -> StorageResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let connection = Arc::clone(connection);
        tokio::task::spawn_blocking(move || operation(&connection))
            .await
            .map_err(StorageError::Task)?
    }
}
