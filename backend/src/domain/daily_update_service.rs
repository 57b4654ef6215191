use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::commands::updates::{CreateDailyUpdateCommand, DailyUpdateListQuery, UpdateDailyUpdateCommand};
use super::error::{DomainError, DomainResult};
use super::fields::{overwrite_optional_if_provided, provided};
use super::models::DailyUpdate;
use crate::storage::JsonConnection;

/// Service for daily attendance, nap, meal and behaviour updates
#[derive(Clone)]
pub struct DailyUpdateService {
    connection: Arc<JsonConnection>,
}

impl DailyUpdateService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Record an update for today (UTC). Child and staff ids are required.
    pub async fn create_update(&self, command: CreateDailyUpdateCommand) -> DomainResult<DailyUpdate> {
        info!(
            "Creating daily update: child={:?}, staff={:?}",
            command.child_id, command.staff_id
        );

        let (child_id, staff_id) = match (provided(command.child_id), provided(command.staff_id)) {
            (Some(child_id), Some(staff_id)) => (child_id, staff_id),
            _ => return Err(DomainError::validation("Child ID and Staff ID required")),
        };

        let update = DailyUpdate {
            id: DailyUpdate::generate_id(),
            child_id,
            staff_id,
            date: Utc::now().date_naive(),
            attendance: provided(command.attendance),
            nap: provided(command.nap),
            meals: provided(command.meals),
            behavior: provided(command.behavior),
        };

        let update = JsonConnection::blocking(&self.connection, move |connection| {
            connection.daily_updates().insert(update)
        })
        .await?;

        info!("Created daily update {} for child {}", update.id, update.child_id);
        Ok(update)
    }

    /// List a child's updates in the order they were recorded
    pub async fn list_updates(&self, query: DailyUpdateListQuery) -> DomainResult<Vec<DailyUpdate>> {
        info!("Listing daily updates: {:?}", query);

        let updates: Vec<DailyUpdate> = self.connection.daily_updates().read(|records| {
            records
                .iter()
                .filter(|update| update.child_id == query.child_id)
                .filter(|update| query.date.map_or(true, |date| update.date == date))
                .cloned()
                .collect()
        });

        info!("Found {} daily updates for child {}", updates.len(), query.child_id);
        Ok(updates)
    }

    /// Apply a partial update. Only non-empty fields overwrite stored values.
    pub async fn edit_update(&self, command: UpdateDailyUpdateCommand) -> DomainResult<DailyUpdate> {
        info!("Editing daily update: {}", command.update_id);

        let UpdateDailyUpdateCommand {
            update_id,
            attendance,
            nap,
            meals,
            behavior,
        } = command;

        let id = update_id.clone();
        let updated = JsonConnection::blocking(&self.connection, move |connection| {
            connection.daily_updates().update(&id, |update| {
                overwrite_optional_if_provided(&mut update.attendance, attendance);
                overwrite_optional_if_provided(&mut update.nap, nap);
                overwrite_optional_if_provided(&mut update.meals, meals);
                overwrite_optional_if_provided(&mut update.behavior, behavior);
            })
        })
        .await?;

        match updated {
            Some(update) => {
                info!("Edited daily update: {}", update.id);
                Ok(update)
            }
            None => {
                warn!("Daily update not found for edit: {}", update_id);
                Err(DomainError::not_found("Update", update_id))
            }
        }
    }

    pub async fn delete_update(&self, update_id: &str) -> DomainResult<()> {
        info!("Deleting daily update: {}", update_id);

        let id = update_id.to_string();
        let removed = JsonConnection::blocking(&self.connection, move |connection| {
            connection.daily_updates().remove(&id)
        })
        .await?;

        if !removed {
            warn!("Daily update not found for delete: {}", update_id);
            return Err(DomainError::not_found("Update", update_id));
        }

        info!("Deleted daily update: {}", update_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn setup() -> (DailyUpdateService, Arc<JsonConnection>, TestEnvironment) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let connection = env.connection().expect("Failed to open connection");
        (DailyUpdateService::new(connection.clone()), connection, env)
    }

    fn create_command(child_id: &str, attendance: &str) -> CreateDailyUpdateCommand {
        CreateDailyUpdateCommand {
            child_id: Some(child_id.to_string()),
            staff_id: Some("S1".to_string()),
            attendance: Some(attendance.to_string()),
            nap: Some("1h".to_string()),
            meals: Some("Ate everything".to_string()),
            behavior: Some("Cheerful".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_todays_date() {
        let (service, _connection, _env) = setup();

        let update = service.create_update(create_command("C1", "Present")).await.unwrap();

        assert!(update.id.starts_with("update::"));
        assert_eq!(update.date, Utc::now().date_naive());
        assert_eq!(update.attendance.as_deref(), Some("Present"));
    }

    #[tokio::test]
    async fn test_create_requires_child_and_staff() {
        let (service, connection, _env) = setup();

        let mut command = create_command("C1", "Present");
        command.staff_id = None;
        let missing_staff = service.create_update(command).await;

        let mut command = create_command("", "Present");
        command.child_id = Some(String::new());
        let missing_child = service.create_update(command).await;

        assert!(matches!(missing_staff, Err(DomainError::Validation(_))));
        assert!(matches!(missing_child, Err(DomainError::Validation(_))));
        assert!(connection.daily_updates().is_empty());
    }

    #[tokio::test]
    async fn test_same_child_and_day_may_have_several_updates() {
        let (service, _connection, _env) = setup();
        let morning = service.create_update(create_command("C1", "Present")).await.unwrap();
        let afternoon = service.create_update(create_command("C1", "Left early")).await.unwrap();
        service.create_update(create_command("C2", "Absent")).await.unwrap();

        let updates = service
            .list_updates(DailyUpdateListQuery {
                child_id: "C1".to_string(),
                date: None,
            })
            .await
            .unwrap();

        assert_eq!(updates, vec![morning, afternoon]);
    }

    #[tokio::test]
    async fn test_list_filters_by_date() {
        let (service, connection, _env) = setup();
        let today = service.create_update(create_command("C1", "Present")).await.unwrap();
        connection
            .daily_updates()
            .insert(DailyUpdate {
                id: "update::old".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 24).unwrap(),
                ..today.clone()
            })
            .unwrap();

        let updates = service
            .list_updates(DailyUpdateListQuery {
                child_id: "C1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 12, 24),
            })
            .await
            .unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, "update::old");
    }

    #[tokio::test]
    async fn test_edit_changes_only_supplied_fields() {
        let (service, _connection, _env) = setup();
        let original = service.create_update(create_command("C1", "Present")).await.unwrap();

        let edited = service
            .edit_update(UpdateDailyUpdateCommand {
                update_id: original.id.clone(),
                behavior: Some("Sleepy".to_string()),
                meals: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            edited,
            DailyUpdate {
                behavior: Some("Sleepy".to_string()),
                ..original
            }
        );
    }

    #[tokio::test]
    async fn test_edit_and_delete_unknown_update() {
        let (service, _connection, _env) = setup();

        let edit = service
            .edit_update(UpdateDailyUpdateCommand {
                update_id: "update::missing".to_string(),
                nap: Some("2h".to_string()),
                ..Default::default()
            })
            .await;
        let delete = service.delete_update("update::missing").await;

        assert!(matches!(edit, Err(DomainError::NotFound { .. })));
        assert!(matches!(delete, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_update() {
        let (service, connection, _env) = setup();
        let update = service.create_update(create_command("C1", "Present")).await.unwrap();

        service.delete_update(&update.id).await.unwrap();

        assert!(connection.daily_updates().is_empty());
    }
}
