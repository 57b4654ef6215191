use chrono::{NaiveDate, SecondsFormat};
use shared::{
    Activity as ActivityDto, CreateActivityRequest, DailySummary, DailySummaryResponse,
    UpdateActivityRequest,
};

use crate::domain::commands::activities::{
    ActivityListQuery, ActivityScope, AttachPhotosCommand, CreateActivityCommand, DailySummaryResult,
    SummaryQuery, UpdateActivityCommand,
};
use crate::domain::fields::parse_date_filter;
use crate::domain::models::Activity;
use crate::domain::DomainResult;

pub struct ActivityMapper;

impl ActivityMapper {
    pub fn to_dto(activity: Activity) -> ActivityDto {
        ActivityDto {
            date: activity.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            id: activity.id,
            activity_type: activity.activity_type,
            title: activity.title,
            description: activity.description,
            child_id: activity.child_id,
            staff_id: activity.staff_id,
            child_name: activity.child_name,
            staff_name: activity.staff_name,
            photos: activity.photos,
        }
    }

    pub fn to_dtos(activities: Vec<Activity>) -> Vec<ActivityDto> {
        activities.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateActivityRequest) -> CreateActivityCommand {
        CreateActivityCommand {
            activity_type: request.activity_type,
            title: request.title,
            description: request.description,
            child_id: request.child_id,
            staff_id: request.staff_id,
            child_name: request.child_name,
            staff_name: request.staff_name,
        }
    }

    pub fn to_update_command(activity_id: String, request: UpdateActivityRequest) -> UpdateActivityCommand {
        UpdateActivityCommand {
            activity_id,
            activity_type: request.activity_type,
            title: request.title,
            description: request.description,
            child_name: request.child_name,
            staff_name: request.staff_name,
        }
    }

    pub fn to_attach_command(activity_id: String, photos: Vec<String>) -> AttachPhotosCommand {
        AttachPhotosCommand { activity_id, photos }
    }

    /// Build a listing query from raw `type` and `date` query parameters
    pub fn to_list_query(
        scope: ActivityScope,
        activity_type: Option<String>,
        date: Option<&str>,
    ) -> DomainResult<ActivityListQuery> {
        Ok(ActivityListQuery {
            scope,
            activity_type,
            date: parse_date_filter(date)?,
        })
    }

    /// Build a summary query; a missing date means `today`
    pub fn to_summary_query(
        child_id: String,
        date: Option<&str>,
        today: NaiveDate,
    ) -> DomainResult<SummaryQuery> {
        Ok(SummaryQuery {
            child_id,
            date: parse_date_filter(date)?.unwrap_or(today),
        })
    }

    pub fn to_summary_response(result: DailySummaryResult) -> DailySummaryResponse {
        DailySummaryResponse {
            success: true,
            date: result.date.format("%Y-%m-%d").to_string(),
            summary: DailySummary {
                meals: Self::to_dtos(result.meals),
                naps: Self::to_dtos(result.naps),
                activities: Self::to_dtos(result.activities),
                updates: Self::to_dtos(result.updates),
                total: result.total,
                photos_count: result.photos_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use chrono::{TimeZone, Utc};
    use shared::ActivityType;

    fn activity() -> Activity {
        Activity {
            id: "activity::1".to_string(),
            activity_type: ActivityType::Nap,
            title: "Nap".to_string(),
            description: "Slept well".to_string(),
            child_id: "C1".to_string(),
            staff_id: "S1".to_string(),
            child_name: "Liam".to_string(),
            staff_name: "Ms. Anita".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 20, 13, 5, 0).unwrap(),
            photos: vec!["/uploads/nap.png".to_string()],
        }
    }

    #[test]
    fn test_dto_uses_rfc3339_timestamp() {
        let dto = ActivityMapper::to_dto(activity());

        assert_eq!(dto.date, "2025-01-20T13:05:00.000Z");
        assert_eq!(dto.activity_type, ActivityType::Nap);
        assert_eq!(dto.photos, vec!["/uploads/nap.png".to_string()]);
    }

    #[test]
    fn test_summary_query_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        let query = ActivityMapper::to_summary_query("C1".to_string(), None, today).unwrap();
        assert_eq!(query.date, today);

        let query = ActivityMapper::to_summary_query("C1".to_string(), Some("2024-12-24"), today).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
    }

    #[test]
    fn test_list_query_rejects_malformed_date() {
        let result = ActivityMapper::to_list_query(
            ActivityScope::Child("C1".to_string()),
            Some("meal".to_string()),
            Some("20/01/2025"),
        );

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
