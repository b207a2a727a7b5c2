//! HTTP client for the grading gateway API.
//!
//! Configuration is via environment variables:
//! - `GRADER_STUDIO_URL` - Base URL (default: `http://localhost:3000/api/v1`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use grader_gateway::models::{
    ExamTemplate, GradingResult, Rubric, SavedRubric, SavedTemplate, Submission,
};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:3000/api/v1";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The gateway passed an upstream failure through. Status and body are
    /// the model API's own.
    #[error("Grading failed upstream ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Server error: {0}")]
    Server(String),
}

/// What a 200 from the grade endpoint can carry. The diagnostic branches are
/// part of the contract, not errors: callers must decide what to do with an
/// unparseable model reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GradeOutcome {
    /// A well-formed grading result.
    Graded(GradingResult),
    /// The model produced text that was not valid JSON.
    RawText { raw: String },
    /// The gateway found no usable content and forwarded the entire upstream
    /// body.
    RawResponse {
        #[serde(rename = "rawResponse")]
        raw_response: Value,
    },
}

/// HTTP client for the grading gateway.
#[derive(Debug, Clone)]
pub struct GradeClient {
    base_url: String,
    client: Client,
}

impl GradeClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GRADER_STUDIO_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    // ============================================================
    // Grading
    // ============================================================

    /// Submit answers for grading against a rubric.
    ///
    /// A 200 decodes into one of the three [`GradeOutcome`] shapes. A non-200
    /// is the upstream model API's own status and body, surfaced as
    /// [`ClientError::Upstream`].
    pub async fn grade(
        &self,
        rubric: &Rubric,
        submission: &Submission,
    ) -> Result<GradeOutcome, ClientError> {
        let response = self
            .client
            .post(self.url("/grade"))
            .json(&serde_json::json!({
                "submission": submission,
                "rubric": rubric
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }

    // ============================================================
    // Templates
    // ============================================================

    /// Save an exam template.
    pub async fn save_template(
        &self,
        template: &ExamTemplate,
    ) -> Result<SavedTemplate, ClientError> {
        let response = self
            .client
            .post(self.url("/templates"))
            .json(template)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List saved templates, newest first.
    pub async fn list_templates(&self) -> Result<Vec<SavedTemplate>, ClientError> {
        let response = self.client.get(self.url("/templates")).send().await?;
        self.handle_response(response).await
    }

    /// Get a template by ID.
    pub async fn get_template(&self, id: Uuid) -> Result<SavedTemplate, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/templates/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // Rubrics
    // ============================================================

    /// Save a rubric.
    pub async fn save_rubric(&self, rubric: &Rubric) -> Result<SavedRubric, ClientError> {
        let response = self
            .client
            .post(self.url("/rubrics"))
            .json(rubric)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List saved rubrics, newest first.
    pub async fn list_rubrics(&self) -> Result<Vec<SavedRubric>, ClientError> {
        let response = self.client.get(self.url("/rubrics")).send().await?;
        self.handle_response(response).await
    }

    /// Get a rubric by ID.
    pub async fn get_rubric(&self, id: Uuid) -> Result<SavedRubric, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/rubrics/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
