use shared::{CreateDailyUpdateRequest, DailyUpdate as DailyUpdateDto, UpdateDailyUpdateRequest};

use crate::domain::commands::updates::{
    CreateDailyUpdateCommand, DailyUpdateListQuery, UpdateDailyUpdateCommand,
};
use crate::domain::fields::parse_date_filter;
use crate::domain::models::DailyUpdate;
use crate::domain::DomainResult;

pub struct DailyUpdateMapper;

impl DailyUpdateMapper {
    pub fn to_dto(update: DailyUpdate) -> DailyUpdateDto {
        DailyUpdateDto {
            id: update.id,
            child_id: update.child_id,
            staff_id: update.staff_id,
            date: update.date.format("%Y-%m-%d").to_string(),
            attendance: update.attendance,
            nap: update.nap,
            meals: update.meals,
            behavior: update.behavior,
        }
    }

    pub fn to_create_command(request: CreateDailyUpdateRequest) -> CreateDailyUpdateCommand {
        CreateDailyUpdateCommand {
            child_id: request.child_id,
            staff_id: request.staff_id,
            attendance: request.attendance,
            nap: request.nap,
            meals: request.meals,
            behavior: request.behavior,
        }
    }

    pub fn to_update_command(update_id: String, request: UpdateDailyUpdateRequest) -> UpdateDailyUpdateCommand {
        UpdateDailyUpdateCommand {
            update_id,
            attendance: request.attendance,
            nap: request.nap,
            meals: request.meals,
            behavior: request.behavior,
        }
    }

    pub fn to_list_query(child_id: String, date: Option<&str>) -> DomainResult<DailyUpdateListQuery> {
        Ok(DailyUpdateListQuery {
            child_id,
            date: parse_date_filter(date)?,
        })
    }
}
