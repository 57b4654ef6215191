use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use shared::{
    CreateDailyUpdateRequest, DailyUpdateListResponse, DailyUpdateResponse, DeleteResponse,
    UpdateDailyUpdateRequest,
};
use tracing::{error, info};

use super::api_error::{ApiError, ApiJson};
use super::mappers::DailyUpdateMapper;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DailyUpdateParams {
    pub date: Option<String>,
}

// One route serves both: GET reads the segment as a child id, PUT and DELETE
// read it as an update id.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_daily_update)).route(
        "/:id",
        get(list_daily_updates)
            .put(update_daily_update)
            .delete(delete_daily_update),
    )
}

/// POST /api/updates
pub async fn create_daily_update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateDailyUpdateRequest>,
) -> impl IntoResponse {
    info!("POST /api/updates - request: {:?}", request);

    let command = DailyUpdateMapper::to_create_command(request);
    match state.daily_update_service.create_update(command).await {
        Ok(update) => (
            StatusCode::CREATED,
            Json(DailyUpdateResponse {
                success: true,
                update: DailyUpdateMapper::to_dto(update),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error creating daily update: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// GET /api/updates/:child_id
pub async fn list_daily_updates(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(params): Query<DailyUpdateParams>,
) -> impl IntoResponse {
    info!("GET /api/updates/{} - query: {:?}", child_id, params);

    let query = match DailyUpdateMapper::to_list_query(child_id, params.date.as_deref()) {
        Ok(query) => query,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.daily_update_service.list_updates(query).await {
        Ok(updates) => (
            StatusCode::OK,
            Json(DailyUpdateListResponse {
                success: true,
                count: updates.len(),
                updates: updates.into_iter().map(DailyUpdateMapper::to_dto).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error listing daily updates: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// PUT /api/updates/:id
pub async fn update_daily_update(
    State(state): State<AppState>,
    Path(update_id): Path<String>,
    ApiJson(request): ApiJson<UpdateDailyUpdateRequest>,
) -> impl IntoResponse {
    info!("PUT /api/updates/{} - request: {:?}", update_id, request);

    let command = DailyUpdateMapper::to_update_command(update_id, request);
    match state.daily_update_service.edit_update(command).await {
        Ok(update) => (
            StatusCode::OK,
            Json(DailyUpdateResponse {
                success: true,
                update: DailyUpdateMapper::to_dto(update),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error updating daily update: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// DELETE /api/updates/:id
pub async fn delete_daily_update(
    State(state): State<AppState>,
    Path(update_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/updates/{}", update_id);

    match state.daily_update_service.delete_update(&update_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: "Update deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error deleting daily update: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send, TestApp};
    use axum::http::{Method, StatusCode};
    use chrono::Utc;
    use serde_json::json;

    async fn create(app: &TestApp, child_id: &str, attendance: &str) -> String {
        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/updates",
            Some(json!({"childId": child_id, "staffId": "S1", "attendance": attendance})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["update"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_and_list_updates() {
        let app = TestApp::new();
        create(&app, "C1", "Present").await;
        create(&app, "C1", "Left early").await;
        create(&app, "C2", "Absent").await;
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

        let (status, body) = send(&app.router, Method::GET, "/api/updates/C1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["updates"][0]["attendance"], "Present");
        assert_eq!(body["updates"][1]["attendance"], "Left early");
        assert_eq!(body["updates"][0]["date"], today);

        let (_, body) = send(&app.router, Method::GET, "/api/updates/C1?date=2000-01-01", None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_create_without_staff_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/updates",
            Some(json!({"childId": "C1", "attendance": "Present"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Child ID and Staff ID required");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = TestApp::new();
        let id = create(&app, "C1", "Present").await;

        let (status, body) = send(
            &app.router,
            Method::PUT,
            &format!("/api/updates/{}", id),
            Some(json!({"behavior": "Sleepy", "attendance": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["update"]["behavior"], "Sleepy");
        assert_eq!(body["update"]["attendance"], "Present");

        let (status, _) = send(&app.router, Method::DELETE, &format!("/api/updates/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app.router, Method::DELETE, &format!("/api/updates/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "not_found");
    }
}
