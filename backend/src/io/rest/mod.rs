//! # REST API
//!
//! JSON over HTTP. Each resource has its own router; `api_router` nests them
//! under the paths the web client expects. Handlers log the request, map the
//! DTO to a domain command, call the service and map the result back. Failures
//! become an `ApiError` with a structured body.

pub mod activity_apis;
pub mod api_error;
pub mod daily_update_apis;
pub mod mappers;
pub mod staff_apis;

use axum::{response::IntoResponse, routing::get, Json, Router};
use shared::ApiInfoResponse;
use tracing::info;

pub use api_error::ApiError;

use crate::AppState;

const ENDPOINTS: &[&str] = &[
    "POST /api/activities",
    "PUT /api/activities/:id",
    "DELETE /api/activities/:id",
    "POST /api/activities/:id/photos",
    "GET /api/activities/child/:childId",
    "GET /api/activities/summary/:childId",
    "GET /api/activities/staff/:staffId",
    "POST /api/staff",
    "GET /api/staff",
    "PUT /api/staff/:id",
    "DELETE /api/staff/:id",
    "POST /api/updates",
    "GET /api/updates/:childId",
    "PUT /api/updates/:id",
    "DELETE /api/updates/:id",
];

/// Routes mounted under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/activities", activity_apis::router())
        .nest("/staff", staff_apis::router())
        .nest("/updates", daily_update_apis::router())
        .route("/test", get(api_info))
}

/// GET /api/test
pub async fn api_info() -> impl IntoResponse {
    info!("GET /api/test");

    Json(ApiInfoResponse {
        message: "Daycare API is working!".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::storage::json::test_utils::TestEnvironment;
    use crate::AppState;

    /// API router over a throwaway data directory
    pub struct TestApp {
        pub router: Router,
        _env: TestEnvironment,
    }

    impl TestApp {
        pub fn new() -> Self {
            let env = TestEnvironment::new().expect("Failed to create test environment");
            let connection = env.connection().expect("Failed to open connection");
            let router = Router::new()
                .nest("/api", super::api_router())
                .with_state(AppState::new(connection));
            Self { router, _env: env }
        }
    }

    /// Send one request and decode the JSON body (`Null` when empty)
    pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
