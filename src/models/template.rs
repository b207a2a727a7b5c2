use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An exam template authored in the studio: the exam text plus whether
/// students may attach a scanned copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamTemplate {
    pub title: String,
    pub instructions: String,
    #[serde(default, rename = "allowAttachments")]
    pub allow_attachments: bool,
    /// Reference to a single attached file, when attachments are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// A template held in the mock store, with id and timestamps assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub id: Uuid,
    #[serde(flatten)]
    pub template: ExamTemplate,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
