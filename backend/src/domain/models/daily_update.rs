//! Domain model for a daily attendance/behaviour update.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Record;

/// Several updates for the same child and day may coexist; only `id` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUpdate {
    pub id: String,
    pub child_id: String,
    pub staff_id: String,
    /// Calendar date only, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
}

impl DailyUpdate {
    pub fn generate_id() -> String {
        format!("update::{}", Uuid::new_v4())
    }
}

impl Record for DailyUpdate {
    const COLLECTION: &'static str = "daily updates";

    fn id(&self) -> &str {
        &self.id
    }
}
