use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::AppState;
use crate::gateway::{self, GatewayError, GradeRequest};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Every grading failure resolves to a JSON (or verbatim upstream) response;
/// nothing throws past this boundary.
///
/// Upstream non-success keeps the original status and body so the caller sees
/// exactly what the model API said. Everything else is a generic 500 with the
/// detail logged server-side.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Upstream { status, body } => {
                tracing::warn!(status, "upstream grading call returned non-success");
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, body).into_response()
            }
            other => {
                tracing::error!("grading call failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Grading
// ============================================================

/// Proxy one grading call to the external model.
///
/// On any upstream 2xx this responds 200 with either the grading result or a
/// `{raw}` / `{rawResponse}` diagnostic wrapper; there is no third shape.
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<Value>, GatewayError> {
    let shape = gateway::grade(&state.http, &state.config, &request).await?;
    Ok(Json(shape.into_body()))
}

// ============================================================
// Templates
// ============================================================

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<SavedTemplate>> {
    Json(state.store.list_templates())
}

pub async fn save_template(
    State(state): State<AppState>,
    Json(input): Json<ExamTemplate>,
) -> (StatusCode, Json<SavedTemplate>) {
    (StatusCode::CREATED, Json(state.store.save_template(input)))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedTemplate>, (StatusCode, String)> {
    state
        .store
        .get_template(id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Template not found".to_string()))
}

// ============================================================
// Rubrics
// ============================================================

pub async fn list_rubrics(State(state): State<AppState>) -> Json<Vec<SavedRubric>> {
    Json(state.store.list_rubrics())
}

pub async fn save_rubric(
    State(state): State<AppState>,
    Json(input): Json<Rubric>,
) -> (StatusCode, Json<SavedRubric>) {
    (StatusCode::CREATED, Json(state.store.save_rubric(input)))
}

pub async fn get_rubric(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedRubric>, (StatusCode, String)> {
    state
        .store
        .get_rubric(id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Rubric not found".to_string()))
}
