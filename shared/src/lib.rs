use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entry a staff member logs for a child.
///
/// The four known kinds drive the daily summary buckets. Any other value is
/// kept verbatim in `Other` so records written by older clients survive a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Meal,
    Nap,
    Activity,
    Update,
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Meal => "meal",
            ActivityType::Nap => "nap",
            ActivityType::Activity => "activity",
            ActivityType::Update => "update",
            ActivityType::Other(value) => value,
        }
    }
}

/// Records stored without a type load as an empty, unbucketed type
impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Other(String::new())
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "meal" => ActivityType::Meal,
            "nap" => ActivityType::Nap,
            "activity" => ActivityType::Activity,
            "update" => ActivityType::Update,
            _ => ActivityType::Other(value),
        }
    }
}

impl From<&str> for ActivityType {
    fn from(value: &str) -> Self {
        ActivityType::from(value.to_string())
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a staff member on the roster.
///
/// New input must name one of the three known roles (see [`FromStr`]).
/// Stored records may carry any other value; it is kept verbatim in `Other`
/// so older data files still load and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StaffRole {
    Caregiver,
    Teacher,
    Cook,
    Other(String),
}

impl StaffRole {
    pub fn as_str(&self) -> &str {
        match self {
            StaffRole::Caregiver => "caregiver",
            StaffRole::Teacher => "teacher",
            StaffRole::Cook => "cook",
            StaffRole::Other(value) => value,
        }
    }
}

impl From<String> for StaffRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "caregiver" => StaffRole::Caregiver,
            "teacher" => StaffRole::Teacher,
            "cook" => StaffRole::Cook,
            _ => StaffRole::Other(value),
        }
    }
}

impl From<StaffRole> for String {
    fn from(value: StaffRole) -> Self {
        match value {
            StaffRole::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStaffRoleError(pub String);

impl fmt::Display for ParseStaffRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid role '{}': must be one of caregiver, teacher, cook",
            self.0
        )
    }
}

impl std::error::Error for ParseStaffRoleError {}

impl FromStr for StaffRole {
    type Err = ParseStaffRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caregiver" => Ok(StaffRole::Caregiver),
            "teacher" => Ok(StaffRole::Teacher),
            "cook" => Ok(StaffRole::Cook),
            _ => Err(ParseStaffRoleError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// Activity ID in format: "activity::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub child_id: String,
    pub staff_id: String,
    /// Display name copied from the request, not checked against any roster
    pub child_name: String,
    /// Display name copied from the request, not checked against the staff list
    pub staff_name: String,
    /// Creation timestamp (RFC 3339, UTC)
    pub date: String,
    /// Photo references in the order they were attached
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateActivityRequest {
    pub activity_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub child_id: Option<String>,
    pub staff_id: Option<String>,
    pub child_name: Option<String>,
    pub staff_name: Option<String>,
}

/// Partial update; only non-empty fields are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateActivityRequest {
    pub activity_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub child_name: Option<String>,
    pub staff_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub success: bool,
    pub message: String,
    pub activity: Activity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityListResponse {
    pub success: bool,
    pub count: usize,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachPhotosRequest {
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachPhotosResponse {
    pub success: bool,
    pub message: String,
    /// Only the references attached by this request
    pub photos: Vec<String>,
}

/// One child's activities for one calendar day, grouped by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub meals: Vec<Activity>,
    pub naps: Vec<Activity>,
    pub activities: Vec<Activity>,
    pub updates: Vec<Activity>,
    /// All activities of the day, including kinds outside the four buckets
    pub total: usize,
    /// Activities of the day that carry at least one photo
    pub photos_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub success: bool,
    /// Calendar date summarised (YYYY-MM-DD)
    pub date: String,
    pub summary: DailySummary,
}

// ---------------------------------------------------------------------------
// Staff
// ---------------------------------------------------------------------------

/// Staff ID in format: "staff::<uuid>"
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateStaffRequest {
    pub serial: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub experience: Option<String>,
    pub joining_date: Option<String>,
}

/// Partial update; only non-empty fields are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStaffRequest {
    pub serial: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub experience: Option<String>,
    pub joining_date: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffResponse {
    pub success: bool,
    pub staff: StaffMember,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffListResponse {
    pub success: bool,
    pub count: usize,
    pub staff: Vec<StaffMember>,
}

// ---------------------------------------------------------------------------
// Daily updates
// ---------------------------------------------------------------------------

/// Daily update ID in format: "update::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUpdate {
    pub id: String,
    pub child_id: String,
    pub staff_id: String,
    /// Calendar date the update was recorded on (YYYY-MM-DD)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDailyUpdateRequest {
    pub child_id: Option<String>,
    pub staff_id: Option<String>,
    pub attendance: Option<String>,
    pub nap: Option<String>,
    pub meals: Option<String>,
    pub behavior: Option<String>,
}

/// Partial update; only non-empty fields are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDailyUpdateRequest {
    pub attendance: Option<String>,
    pub nap: Option<String>,
    pub meals: Option<String>,
    pub behavior: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUpdateResponse {
    pub success: bool,
    pub update: DailyUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUpdateListResponse {
    pub success: bool,
    pub count: usize,
    pub updates: Vec<DailyUpdate>,
}

// ---------------------------------------------------------------------------
// Common responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required input field was missing or malformed
    Validation,
    /// The addressed record does not exist
    NotFound,
    /// Reading or writing stored data failed
    Io,
}

/// Body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub kind: ErrorKind,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}
