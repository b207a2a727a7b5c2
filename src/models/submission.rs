use serde::{Deserialize, Serialize};

fn default_temperature() -> f64 {
    0.2
}

/// A student's submission as sent to the gateway.
///
/// Only `answers` participates in grading. The attachment reference and the
/// sampling temperature are collected by the studio forms but not forwarded
/// upstream. Fields default so a partial submission object is tolerated;
/// missing answers grade as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, rename = "studentId")]
    pub student_id: String,
    #[serde(default)]
    pub answers: String,
    /// Reference to an uploaded scan. Unused by the gateway.
    #[serde(default, rename = "attachScan", skip_serializing_if = "Option::is_none")]
    pub attach_scan: Option<String>,
    /// Sampling temperature (0-2). Collected for the form contract only.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            answers: String::new(),
            attach_scan: None,
            temperature: default_temperature(),
        }
    }
}
