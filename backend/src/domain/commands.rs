//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod activities {
    use chrono::NaiveDate;

    use crate::domain::models::Activity;

    /// Sentinel type filter meaning "every activity type"
    pub const ALL_ACTIVITY_TYPES: &str = "all";

    /// Input for logging a new activity.
    #[derive(Debug, Clone, Default)]
    pub struct CreateActivityCommand {
        pub activity_type: Option<String>,
        pub title: Option<String>,
        pub description: Option<String>,
        pub child_id: Option<String>,
        pub staff_id: Option<String>,
        pub child_name: Option<String>,
        pub staff_name: Option<String>,
    }

    /// Partial update of an activity; empty fields are ignored.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateActivityCommand {
        pub activity_id: String,
        pub activity_type: Option<String>,
        pub title: Option<String>,
        pub description: Option<String>,
        pub child_name: Option<String>,
        pub staff_name: Option<String>,
    }

    /// Photo references to append to an activity.
    #[derive(Debug, Clone)]
    pub struct AttachPhotosCommand {
        pub activity_id: String,
        pub photos: Vec<String>,
    }

    /// Which key a listing is scoped to.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ActivityScope {
        /// Parent feed: everything logged for one child
        Child(String),
        /// Staff view: everything one staff member logged
        Staff(String),
    }

    /// Query parameters for listing activities.
    #[derive(Debug, Clone)]
    pub struct ActivityListQuery {
        pub scope: ActivityScope,
        /// Exact activity type, or `"all"` / `None` for no type filter
        pub activity_type: Option<String>,
        /// Calendar day the activity must have been logged on
        pub date: Option<NaiveDate>,
    }

    impl ActivityListQuery {
        pub fn for_child(child_id: impl Into<String>) -> Self {
            Self {
                scope: ActivityScope::Child(child_id.into()),
                activity_type: None,
                date: None,
            }
        }

        pub fn for_staff(staff_id: impl Into<String>) -> Self {
            Self {
                scope: ActivityScope::Staff(staff_id.into()),
                activity_type: None,
                date: None,
            }
        }
    }

    /// Result of listing activities, newest first.
    #[derive(Debug, Clone)]
    pub struct ActivityListResult {
        pub activities: Vec<Activity>,
    }

    impl ActivityListResult {
        pub fn count(&self) -> usize {
            self.activities.len()
        }
    }

    /// Result of attaching photos.
    #[derive(Debug, Clone)]
    pub struct AttachPhotosResult {
        /// Only the references attached by this command
        pub photos: Vec<String>,
    }

    /// Input for the per-child daily summary.
    #[derive(Debug, Clone)]
    pub struct SummaryQuery {
        pub child_id: String,
        pub date: NaiveDate,
    }

    /// One child's activities for one day, grouped by type.
    #[derive(Debug, Clone)]
    pub struct DailySummaryResult {
        pub date: NaiveDate,
        pub meals: Vec<Activity>,
        pub naps: Vec<Activity>,
        pub activities: Vec<Activity>,
        pub updates: Vec<Activity>,
        pub total: usize,
        pub photos_count: usize,
    }
}

pub mod staff {
    /// Input for adding a staff member to the roster.
    #[derive(Debug, Clone, Default)]
    pub struct CreateStaffCommand {
        pub serial: Option<String>,
        pub name: Option<String>,
        pub phone: Option<String>,
        pub role: Option<String>,
        pub experience: Option<String>,
        pub joining_date: Option<String>,
    }

    /// Partial update of a staff member; empty fields are ignored.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateStaffCommand {
        pub staff_id: String,
        pub serial: Option<String>,
        pub name: Option<String>,
        pub phone: Option<String>,
        pub role: Option<String>,
        pub experience: Option<String>,
        pub joining_date: Option<String>,
        pub email: Option<String>,
    }
}

pub mod updates {
    use chrono::NaiveDate;

    /// Input for recording a daily update.
    #[derive(Debug, Clone, Default)]
    pub struct CreateDailyUpdateCommand {
        pub child_id: Option<String>,
        pub staff_id: Option<String>,
        pub attendance: Option<String>,
        pub nap: Option<String>,
        pub meals: Option<String>,
        pub behavior: Option<String>,
    }

    /// Partial update of a daily update; empty fields are ignored.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateDailyUpdateCommand {
        pub update_id: String,
        pub attendance: Option<String>,
        pub nap: Option<String>,
        pub meals: Option<String>,
        pub behavior: Option<String>,
    }

    /// Query parameters for listing a child's daily updates.
    #[derive(Debug, Clone)]
    pub struct DailyUpdateListQuery {
        pub child_id: String,
        pub date: Option<NaiveDate>,
    }
}
