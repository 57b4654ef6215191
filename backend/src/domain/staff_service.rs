use std::sync::Arc;

use shared::StaffRole;
use tracing::{info, warn};

use super::commands::staff::{CreateStaffCommand, UpdateStaffCommand};
use super::error::{DomainError, DomainResult};
use super::fields::{overwrite_if_provided, overwrite_optional_if_provided, provided};
use super::models::StaffMember;
use crate::storage::JsonConnection;

/// Service for managing the staff roster
#[derive(Clone)]
pub struct StaffService {
    connection: Arc<JsonConnection>,
}

impl StaffService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    /// Add a staff member. Serial, name, phone and role are required.
    pub async fn create_staff(&self, command: CreateStaffCommand) -> DomainResult<StaffMember> {
        info!("Creating staff member: serial={:?}, name={:?}", command.serial, command.name);

        let (serial, name, phone, role) = match (
            provided(command.serial),
            provided(command.name),
            provided(command.phone),
            provided(command.role),
        ) {
            (Some(serial), Some(name), Some(phone), Some(role)) => (serial, name, phone, role),
            _ => {
                return Err(DomainError::validation(
                    "Serial, name, phone, and role are required",
                ))
            }
        };
        let role = parse_role(&role)?;

        let member = StaffMember {
            id: StaffMember::generate_id(),
            serial,
            name,
            phone,
            role,
            experience: provided(command.experience),
            joining_date: provided(command.joining_date),
            email: None,
        };

        let member =
            JsonConnection::blocking(&self.connection, move |connection| connection.staff().insert(member))
                .await?;

        info!("Created staff member: {} with ID: {}", member.name, member.id);
        Ok(member)
    }

    /// Get a staff member by ID
    pub async fn get_staff(&self, staff_id: &str) -> DomainResult<StaffMember> {
        self.connection
            .staff()
            .get(staff_id)
            .ok_or_else(|| DomainError::not_found("Staff", staff_id))
    }

    /// List the whole roster in the order members were added
    pub async fn list_staff(&self) -> DomainResult<Vec<StaffMember>> {
        let staff = self.connection.staff().all();
        info!("Found {} staff members", staff.len());
        Ok(staff)
    }

    /// Apply a partial update. Only non-empty fields overwrite stored values.
    pub async fn update_staff(&self, command: UpdateStaffCommand) -> DomainResult<StaffMember> {
        info!("Updating staff member: {}", command.staff_id);

        let role = match provided(command.role) {
            Some(role) => Some(parse_role(&role)?),
            None => None,
        };

        let UpdateStaffCommand {
            staff_id,
            serial,
            name,
            phone,
            experience,
            joining_date,
            email,
            ..
        } = command;

        let id = staff_id.clone();
        let updated = JsonConnection::blocking(&self.connection, move |connection| {
            connection.staff().update(&id, |member| {
                overwrite_if_provided(&mut member.serial, serial);
                overwrite_if_provided(&mut member.name, name);
                overwrite_if_provided(&mut member.phone, phone);
                if let Some(role) = role {
                    member.role = role;
                }
                overwrite_optional_if_provided(&mut member.experience, experience);
                overwrite_optional_if_provided(&mut member.joining_date, joining_date);
                overwrite_optional_if_provided(&mut member.email, email);
            })
        })
        .await?;

        match updated {
            Some(member) => {
                info!("Updated staff member: {} with ID: {}", member.name, member.id);
                Ok(member)
            }
            None => {
                warn!("Staff member not found for update: {}", staff_id);
                Err(DomainError::not_found("Staff", staff_id))
            }
        }
    }

    /// Remove a staff member. Activities and updates that reference the id
    /// are left as they are.
    pub async fn delete_staff(&self, staff_id: &str) -> DomainResult<()> {
        info!("Deleting staff member: {}", staff_id);

        let id = staff_id.to_string();
        let removed =
            JsonConnection::blocking(&self.connection, move |connection| connection.staff().remove(&id))
                .await?;

        if !removed {
            warn!("Staff member not found for delete: {}", staff_id);
            return Err(DomainError::not_found("Staff", staff_id));
        }

        info!("Deleted staff member: {}", staff_id);
        Ok(())
    }
}

fn parse_role(role: &str) -> DomainResult<StaffRole> {
    role.parse::<StaffRole>()
        .map_err(|e| DomainError::validation(e.to_string()))
}
