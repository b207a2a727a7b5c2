//! The grading gateway core: one outbound call to the external model per
//! invocation, with defensive normalization of whatever comes back.
//!
//! Error policy: upstream non-success is passed through verbatim, everything
//! else resolves to a generic 500. No retry, no timeout, no transformation.

mod response;
mod schema;

pub use response::ResponseShape;
pub use schema::{build_request_body, grading_result_schema, SCHEMA_NAME, SYSTEM_PROMPT};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::models::{GradingResult, Rubric, Submission};

/// Request body of the grade endpoint. Both parts are tolerated absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    pub submission: Option<Submission>,
    /// The rubric is forwarded as-is; it is not required to match the typed
    /// model for grading to proceed.
    #[serde(default)]
    pub rubric: Option<Value>,
}

/// Failures of one grading call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream service answered with a non-success status. Status and
    /// body are propagated to the caller verbatim.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: Vec<u8> },

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request construction failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Issue a single grading call and normalize the reply.
///
/// Returns the classified [`ResponseShape`] on any upstream 2xx; the caller
/// decides how to serve each shape.
pub async fn grade(
    http: &reqwest::Client,
    config: &GatewayConfig,
    request: &GradeRequest,
) -> Result<ResponseShape, GatewayError> {
    let answers = request
        .submission
        .as_ref()
        .map(|s| s.answers.as_str())
        .unwrap_or("");

    let body = schema::build_request_body(config, request.rubric.as_ref(), answers)?;

    let upstream = http
        .post(config.responses_url())
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await?;

    let status = upstream.status();
    if !status.is_success() {
        let body = upstream.bytes().await?;
        return Err(GatewayError::Upstream {
            status: status.as_u16(),
            body: body.to_vec(),
        });
    }

    let data: Value = upstream.json().await?;
    let shape = ResponseShape::classify(data);
    audit_against_rubric(&shape, request.rubric.as_ref());

    Ok(shape)
}

/// Log discrepancies between the grading payload and the submitted rubric.
///
/// The model is trusted: findings are warnings only and the payload is served
/// unchanged. Skipped when the rubric does not fit the typed model or the
/// shape carries no payload.
fn audit_against_rubric(shape: &ResponseShape, rubric: Option<&Value>) {
    let Some(payload) = shape.payload() else {
        return;
    };
    let Some(rubric) = rubric else { return };
    let Ok(rubric) = serde_json::from_value::<Rubric>(rubric.clone()) else {
        return;
    };
    let Ok(result) = serde_json::from_value::<GradingResult>(payload.clone()) else {
        return;
    };

    for finding in result.audit(&rubric) {
        tracing::warn!("grading audit: {}", finding);
    }
}
