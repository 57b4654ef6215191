use std::sync::Arc;

use chrono::Utc;
use shared::ActivityType;
use tracing::{info, warn};

use super::commands::activities::{
    ActivityListQuery, ActivityListResult, ActivityScope, AttachPhotosCommand, AttachPhotosResult,
    CreateActivityCommand, UpdateActivityCommand, ALL_ACTIVITY_TYPES,
};
use super::error::{DomainError, DomainResult};
use super::fields::{overwrite_if_provided, provided};
use super::models::Activity;
use crate::storage::JsonConnection;

/// Service for logging activities and reading them back as feeds
#[derive(Clone)]
pub struct ActivityService {
    connection: Arc<JsonConnection>,
}

impl ActivityService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Log a new activity. The id, timestamp and empty photo list are
    /// assigned here. No field is required; a missing type is stored empty
    /// and lands in no summary bucket.
    pub async fn create_activity(&self, command: CreateActivityCommand) -> DomainResult<Activity> {
        info!(
            "Creating activity: type={:?}, child={:?}, staff={:?}",
            command.activity_type, command.child_id, command.staff_id
        );

        let activity = Activity {
            id: Activity::generate_id(),
            activity_type: provided(command.activity_type)
                .map(ActivityType::from)
                .unwrap_or_default(),
            title: command.title.unwrap_or_default(),
            description: command.description.unwrap_or_default(),
            child_id: command.child_id.unwrap_or_default(),
            staff_id: command.staff_id.unwrap_or_default(),
            child_name: command.child_name.unwrap_or_default(),
            staff_name: command.staff_name.unwrap_or_default(),
            date: Utc::now(),
            photos: Vec::new(),
        };

        let activity = JsonConnection::blocking(&self.connection, move |connection| {
            connection.activities().insert(activity)
        })
        .await?;

        info!(
            "Created activity {} ({}) for child {}",
            activity.id, activity.activity_type, activity.child_id
        );
        Ok(activity)
    }

    /// Get an activity by ID
    pub async fn get_activity(&self, activity_id: &str) -> DomainResult<Activity> {
        self.connection
            .activities()
            .get(activity_id)
            .ok_or_else(|| DomainError::not_found("Activity", activity_id))
    }

    /// Apply a partial update. Only non-empty fields overwrite stored values;
    /// `date` and `photos` are never touched here.
    pub async fn update_activity(&self, command: UpdateActivityCommand) -> DomainResult<Activity> {
        info!("Updating activity: {}", command.activity_id);

        let UpdateActivityCommand {
            activity_id,
            activity_type,
            title,
            description,
            child_name,
            staff_name,
        } = command;

        let id = activity_id.clone();
        let updated = JsonConnection::blocking(&self.connection, move |connection| {
            connection.activities().update(&id, |activity| {
                if let Some(activity_type) = provided(activity_type) {
                    activity.activity_type = ActivityType::from(activity_type);
                }
                overwrite_if_provided(&mut activity.title, title);
                overwrite_if_provided(&mut activity.description, description);
                overwrite_if_provided(&mut activity.child_name, child_name);
                overwrite_if_provided(&mut activity.staff_name, staff_name);
            })
        })
        .await?;

        match updated {
            Some(activity) => {
                info!("Updated activity: {}", activity.id);
                Ok(activity)
            }
            None => {
                warn!("Activity not found for update: {}", activity_id);
                Err(DomainError::not_found("Activity", activity_id))
            }
        }
    }

    /// Delete an activity permanently
    pub async fn delete_activity(&self, activity_id: &str) -> DomainResult<()> {
        info!("Deleting activity: {}", activity_id);

        let id = activity_id.to_string();
        let removed = JsonConnection::blocking(&self.connection, move |connection| {
            connection.activities().remove(&id)
        })
        .await?;

        if !removed {
            warn!("Activity not found for delete: {}", activity_id);
            return Err(DomainError::not_found("Activity", activity_id));
        }

        info!("Deleted activity: {}", activity_id);
        Ok(())
    }

    /// Append photo references to an activity, keeping order and duplicates.
    /// Returns only the references added by this call.
    pub async fn attach_photos(&self, command: AttachPhotosCommand) -> DomainResult<AttachPhotosResult> {
        info!(
            "Attaching {} photos to activity {}",
            command.photos.len(),
            command.activity_id
        );

        let AttachPhotosCommand { activity_id, photos } = command;

        let id = activity_id.clone();
        let attached = photos.clone();
        let updated = JsonConnection::blocking(&self.connection, move |connection| {
            connection
                .activities()
                .update(&id, move |activity| activity.photos.extend(attached))
        })
        .await?;

        match updated {
            Some(activity) => {
                info!(
                    "Activity {} now has {} photos",
                    activity.id,
                    activity.photos.len()
                );
                Ok(AttachPhotosResult { photos })
            }
            None => {
                warn!("Activity not found for photo upload: {}", activity_id);
                Err(DomainError::not_found("Activity", activity_id))
            }
        }
    }

    /// List activities for a child or a staff member, newest first
    pub async fn list_activities(&self, query: ActivityListQuery) -> DomainResult<ActivityListResult> {
        info!("Listing activities: {:?}", query);

        let activities = self
            .connection
            .activities()
            .read(|records| select_activities(records, &query));

        info!("Found {} activities", activities.len());
        Ok(ActivityListResult { activities })
    }
}

/// Apply scope, type and date filters, then sort newest first.
///
/// The sort is stable, so activities with equal timestamps keep their
/// insertion order.
pub fn select_activities(records: &[Activity], query: &ActivityListQuery) -> Vec<Activity> {
    let type_filter = query
        .activity_type
        .as_deref()
        .filter(|t| !t.is_empty() && *t != ALL_ACTIVITY_TYPES)
        .map(ActivityType::from);

    let mut selected: Vec<Activity> = records
        .iter()
        .filter(|activity| match &query.scope {
            ActivityScope::Child(child_id) => &activity.child_id == child_id,
            ActivityScope::Staff(staff_id) => &activity.staff_id == staff_id,
        })
        .filter(|activity| {
            type_filter
                .as_ref()
                .map_or(true, |activity_type| &activity.activity_type == activity_type)
        })
        .filter(|activity| query.date.map_or(true, |date| activity.calendar_date() == date))
        .cloned()
        .collect();

    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}
