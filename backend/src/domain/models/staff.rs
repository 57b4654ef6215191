use serde::{Deserialize, Serialize};
use shared::StaffRole;
use uuid::Uuid;

use crate::storage::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub serial: String,
    pub name: String,
    pub phone: String,
    pub role: StaffRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    /// Only ever set through a partial update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl StaffMember {
    pub fn generate_id() -> String {
        format!("staff::{}", Uuid::new_v4())
    }
}

impl Record for StaffMember {
    const COLLECTION: &'static str = "staff";

    fn id(&self) -> &str {
        &self.id
    }
}
