//! In-memory stand-in for the LeadConnect registration service.
//!
//! Speaks the same contract as the real backend: `POST /api/users/register`
//! with the draft JSON, `201` on success, and `{"success": false, "msg": ...}`
//! bodies on rejection. Used by `signup mock-server` and by the tests.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::RegistrationFields;

pub const REGISTER_PATH: &str = "/api/users/register";

/// A user accepted by the mock service
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub fields: RegistrationFields,
}

#[derive(Debug, Serialize)]
struct RegisterReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    msg: String,
}

impl RegisterReply {
    fn created(id: u64) -> Self {
        Self {
            success: true,
            id: Some(id),
            msg: "The user was successfully registered".to_string(),
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            msg: msg.into(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockRegistry {
    users: Arc<RwLock<Vec<RegisteredUser>>>,
    /// When set, every registration is answered with this status
    forced_status: Option<u16>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that rejects every request with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            forced_status: Some(status),
            ..Self::default()
        }
    }

    pub async fn users(&self) -> Vec<RegisteredUser> {
        self.users.read().await.clone()
    }

    async fn register(&self, body: Value) -> (StatusCode, RegisterReply) {
        if let Some(status) = self.forced_status {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            warn!(status = status.as_u16(), "Mock registry rejecting by configuration");
            return (status, RegisterReply::error("Registration is unavailable"));
        }

        let fields: RegistrationFields = match serde_json::from_value(body) {
            Ok(fields) => fields,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    RegisterReply::error(format!("Invalid registration payload: {}", e)),
                )
            }
        };

        if fields.username.trim().is_empty() {
            return (StatusCode::BAD_REQUEST, RegisterReply::error("Username is required"));
        }
        if fields.email.trim().is_empty() {
            return (StatusCode::BAD_REQUEST, RegisterReply::error("Email is required"));
        }

        let mut users = self.users.write().await;

        if users.iter().any(|u| u.fields.username == fields.username) {
            return (StatusCode::CONFLICT, RegisterReply::error("Username already taken"));
        }
        if users.iter().any(|u| u.fields.email == fields.email) {
            return (StatusCode::CONFLICT, RegisterReply::error("Email already taken"));
        }

        let id = users.len() as u64 + 1;
        info!(id = id, username = %fields.username, "Mock registry stored user");
        users.push(RegisteredUser { id, fields });

        (StatusCode::CREATED, RegisterReply::created(id))
    }
}

/// POST /api/users/register
async fn register_user(
    State(registry): State<MockRegistry>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let (status, reply) = match body {
        Ok(Json(body)) => registry.register(body).await,
        Err(rejection) => (rejection.status(), RegisterReply::error(rejection.body_text())),
    };
    (status, Json(reply))
}

/// GET /health
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub fn create_mock_app(registry: MockRegistry) -> Router {
    Router::new()
        .route(REGISTER_PATH, post(register_user))
        .route("/health", get(health))
        .with_state(registry)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
