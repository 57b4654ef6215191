//! # Daycare Backend
//!
//! Activity log backend for a daycare: staff log meals, naps, activities and
//! updates for children, attach photo references, and parents read a per-child
//! feed and daily summary. A staff roster and daily attendance updates live
//! alongside.
//!
//! ## Architecture
//!
//! ```text
//! io (REST)  ->  domain (services)  ->  storage (JSON files)
//! ```
//!
//! - **storage**: one pretty-printed JSON array per collection, written
//!   atomically, with an in-memory snapshot and a writer lock per collection
//! - **domain**: validation and business rules; knows nothing about HTTP
//! - **io**: axum handlers and DTO mapping
//! - **config**: YAML file plus environment overrides

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{ActivityService, DailyUpdateService, StaffService, SummaryService};
use crate::storage::JsonConnection;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub activity_service: ActivityService,
    pub summary_service: SummaryService,
    pub staff_service: StaffService,
    pub daily_update_service: DailyUpdateService,
}

impl AppState {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            activity_service: ActivityService::new(connection.clone()),
            summary_service: SummaryService::new(connection.clone()),
            staff_service: StaffService::new(connection.clone()),
            daily_update_service: DailyUpdateService::new(connection),
        }
    }
}

/// Open the data directory and build the services. Also makes sure the
/// uploads directory exists so it can be served.
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Opening data directory {:?}", config.data_directory);
    let connection = JsonConnection::new(&config.data_directory)
        .with_context(|| format!("Failed to open data directory {:?}", config.data_directory))?;

    fs::create_dir_all(&config.uploads_directory).with_context(|| {
        format!(
            "Failed to create uploads directory {:?}",
            config.uploads_directory
        )
    })?;

    Ok(AppState::new(Arc::new(connection)))
}

/// Full application router: `/api`, `/uploads` and CORS
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    let cors = if config.allows_any_origin() {
        cors.allow_origin(Any)
    } else {
        let origin = config
            .allowed_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid allowed origin: {}", config.allowed_origin))?;
        cors.allow_origin(origin)
    };

    Ok(Router::new()
        .nest("/api", io::rest::api_router())
        .nest_service("/uploads", ServeDir::new(&config.uploads_directory))
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn config_in(temp_dir: &TempDir) -> ServerConfig {
        ServerConfig {
            data_directory: temp_dir.path().join("data"),
            uploads_directory: temp_dir.path().join("uploads"),
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_creates_directories_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);

        initialize_backend(&config).unwrap();

        assert!(config.data_directory.join("activities.json").exists());
        assert!(config.data_directory.join("staff.json").exists());
        assert!(config.data_directory.join("dailyUpdates.json").exists());
        assert!(config.uploads_directory.is_dir());
    }

    #[tokio::test]
    async fn test_router_serves_uploads() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let state = initialize_backend(&config).unwrap();
        fs::write(config.uploads_directory.join("1.png"), b"png").unwrap();
        let app = create_router(state, &config).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/uploads/1.png").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"png");
    }

    #[tokio::test]
    async fn test_router_rejects_invalid_origin() {
        let temp_dir = TempDir::new().unwrap();
        let config = ServerConfig {
            allowed_origin: "bad\norigin".to_string(),
            ..config_in(&temp_dir)
        };
        let state = initialize_backend(&config).unwrap();

        assert!(create_router(state, &config).is_err());
    }
}
