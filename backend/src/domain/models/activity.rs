//! Domain model for a logged activity.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::ActivityType;
use uuid::Uuid;

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// Records stored without a type load as an empty, unbucketed type
    #[serde(default)]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub child_id: String,
    #[serde(default)]
    pub staff_id: String,
    // Display names are copied from the request as-is. They are never checked
    // against the staff roster and can drift from it.
    #[serde(default)]
    pub child_name: String,
    #[serde(default)]
    pub staff_name: String,
    /// Creation time, set once on insert
    pub date: DateTime<Utc>,
    /// Append-only photo references
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Activity {
    pub fn generate_id() -> String {
        format!("activity::{}", Uuid::new_v4())
    }

    /// Calendar day (UTC) the activity was logged on
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }
}

impl Record for Activity {
    const COLLECTION: &'static str = "activities";

    fn id(&self) -> &str {
        &self.id
    }
}
