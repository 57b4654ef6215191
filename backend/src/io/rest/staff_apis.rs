use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};
use shared::{CreateStaffRequest, DeleteResponse, StaffListResponse, StaffResponse, UpdateStaffRequest};
use tracing::{error, info};

use super::api_error::{ApiError, ApiJson};
use super::mappers::StaffMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_staff).get(list_staff))
        .route("/:id", put(update_staff).delete(delete_staff))
}

/// POST /api/staff
pub async fn create_staff(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStaffRequest>,
) -> impl IntoResponse {
    info!("POST /api/staff - request: {:?}", request);

    let command = StaffMapper::to_create_command(request);
    match state.staff_service.create_staff(command).await {
        Ok(member) => (
            StatusCode::CREATED,
            Json(StaffResponse {
                success: true,
                staff: StaffMapper::to_dto(member),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error creating staff member: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// GET /api/staff
pub async fn list_staff(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/staff");

    match state.staff_service.list_staff().await {
        Ok(staff) => (
            StatusCode::OK,
            Json(StaffListResponse {
                success: true,
                count: staff.len(),
                staff: staff.into_iter().map(StaffMapper::to_dto).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error listing staff: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// PUT /api/staff/:id
pub async fn update_staff(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    ApiJson(request): ApiJson<UpdateStaffRequest>,
) -> impl IntoResponse {
    info!("PUT /api/staff/{} - request: {:?}", staff_id, request);

    let command = StaffMapper::to_update_command(staff_id, request);
    match state.staff_service.update_staff(command).await {
        Ok(member) => (
            StatusCode::OK,
            Json(StaffResponse {
                success: true,
                staff: StaffMapper::to_dto(member),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error updating staff member: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// DELETE /api/staff/:id
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/staff/{}", staff_id);

    match state.staff_service.delete_staff(&staff_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: "Staff deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error deleting staff member: {:?}", e);
            ApiError::from(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send, TestApp};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn anita() -> serde_json::Value {
        json!({
            "serial": "1",
            "name": "Ms. Anita",
            "phone": "555-0100",
            "role": "caregiver",
            "experience": "3",
            "joiningDate": "2024-09-01"
        })
    }

    #[tokio::test]
    async fn test_create_and_list_staff() {
        let app = TestApp::new();

        let (status, body) = send(&app.router, Method::POST, "/api/staff", Some(anita())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["staff"]["role"], "caregiver");
        assert_eq!(body["staff"]["joiningDate"], "2024-09-01");

        let (status, body) = send(&app.router, Method::GET, "/api/staff", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["staff"][0]["name"], "Ms. Anita");
    }

    #[tokio::test]
    async fn test_create_without_phone_leaves_roster_unchanged() {
        let app = TestApp::new();
        send(&app.router, Method::POST, "/api/staff", Some(anita())).await;

        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/staff",
            Some(json!({"serial": "2", "name": "Mr. Omar", "role": "cook"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Serial, name, phone, and role are required");

        let (_, body) = send(&app.router, Method::GET, "/api/staff", None).await;
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_gets_validation_body() {
        let app = TestApp::new();
        let mut member = anita();
        member["experience"] = json!(3);

        let (status, body) = send(&app.router, Method::POST, "/api/staff", Some(member)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["kind"], "validation");
        let (_, body) = send(&app.router, Method::GET, "/api/staff", None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_update_and_delete_staff() {
        let app = TestApp::new();
        let (_, body) = send(&app.router, Method::POST, "/api/staff", Some(anita())).await;
        let id = body["staff"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app.router,
            Method::PUT,
            &format!("/api/staff/{}", id),
            Some(json!({"role": "teacher", "email": "anita@example.com", "phone": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["staff"]["role"], "teacher");
        assert_eq!(body["staff"]["email"], "anita@example.com");
        assert_eq!(body["staff"]["phone"], "555-0100");

        let (status, body) = send(&app.router, Method::DELETE, &format!("/api/staff/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Staff deleted successfully");

        let (status, _) = send(
            &app.router,
            Method::PUT,
            &format!("/api/staff/{}", id),
            Some(json!({"name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
