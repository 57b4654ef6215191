use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{
    ActivityListResponse, ActivityResponse, AttachPhotosRequest, AttachPhotosResponse,
    CreateActivityRequest, DeleteResponse, UpdateActivityRequest,
};
use tracing::{error, info};

use super::api_error::{ApiError, ApiJson};
use super::mappers::ActivityMapper;
use crate::domain::commands::activities::ActivityScope;
use crate::AppState;

/// Query parameters for the child and staff feeds
#[derive(Debug, Default, Deserialize)]
pub struct ActivityFeedParams {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub date: Option<String>,
}

/// Query parameters for the daily summary
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub date: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_activity))
        .route("/:id", put(update_activity).delete(delete_activity))
        .route("/:id/photos", post(attach_photos))
        .route("/child/:child_id", get(list_child_activities))
        .route("/summary/:child_id", get(get_daily_summary))
        .route("/staff/:staff_id", get(list_staff_activities))
}

/// POST /api/activities
pub async fn create_activity(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateActivityRequest>,
) -> impl IntoResponse {
    info!("POST /api/activities - request: {:?}", request);

    let command = ActivityMapper::to_create_command(request);
    match state.activity_service.create_activity(command).await {
        Ok(activity) => (
            StatusCode::CREATED,
            Json(ActivityResponse {
                success: true,
                message: "Activity created successfully".to_string(),
                activity: ActivityMapper::to_dto(activity),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error creating activity: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// PUT /api/activities/:id
pub async fn update_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    ApiJson(request): ApiJson<UpdateActivityRequest>,
) -> impl IntoResponse {
    info!("PUT /api/activities/{} - request: {:?}", activity_id, request);

    let command = ActivityMapper::to_update_command(activity_id, request);
    match state.activity_service.update_activity(command).await {
        Ok(activity) => (
            StatusCode::OK,
            Json(ActivityResponse {
                success: true,
                message: "Activity updated successfully".to_string(),
                activity: ActivityMapper::to_dto(activity),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error updating activity: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// DELETE /api/activities/:id
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/activities/{}", activity_id);

    match state.activity_service.delete_activity(&activity_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: "Activity deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error deleting activity: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// POST /api/activities/:id/photos
pub async fn attach_photos(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    ApiJson(request): ApiJson<AttachPhotosRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/activities/{}/photos - {} photo(s)",
        activity_id,
        request.photos.len()
    );

    let command = ActivityMapper::to_attach_command(activity_id, request.photos);
    match state.activity_service.attach_photos(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AttachPhotosResponse {
                success: true,
                message: "Photos uploaded successfully".to_string(),
                photos: result.photos,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error attaching photos: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// GET /api/activities/child/:child_id
pub async fn list_child_activities(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(params): Query<ActivityFeedParams>,
) -> impl IntoResponse {
    info!("GET /api/activities/child/{} - query: {:?}", child_id, params);
    list_activities(state, ActivityScope::Child(child_id), params).await
}

/// GET /api/activities/staff/:staff_id
pub async fn list_staff_activities(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    Query(params): Query<ActivityFeedParams>,
) -> impl IntoResponse {
    info!("GET /api/activities/staff/{} - query: {:?}", staff_id, params);
    list_activities(state, ActivityScope::Staff(staff_id), params).await
}

async fn list_activities(
    state: AppState,
    scope: ActivityScope,
    params: ActivityFeedParams,
) -> axum::response::Response {
    let query = match ActivityMapper::to_list_query(scope, params.activity_type, params.date.as_deref()) {
        Ok(query) => query,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.activity_service.list_activities(query).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ActivityListResponse {
                success: true,
                count: result.count(),
                activities: ActivityMapper::to_dtos(result.activities),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error listing activities: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// GET /api/activities/summary/:child_id
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    info!("GET /api/activities/summary/{} - query: {:?}", child_id, params);

    let today = Utc::now().date_naive();
    let query = match ActivityMapper::to_summary_query(child_id, params.date.as_deref(), today) {
        Ok(query) => query,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.summary_service.summarize(query).await {
        Ok(summary) => (StatusCode::OK, Json(ActivityMapper::to_summary_response(summary))).into_response(),
        Err(e) => {
            error!("Error building daily summary: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}
