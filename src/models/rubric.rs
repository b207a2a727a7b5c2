use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single gradable dimension of a rubric.
///
/// Wire names follow the studio contract: `criterion` is the human label,
/// `maxPoints` the weight (0-100), `guidance` optional marking notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Criterion {
    /// Identifier, unique within its rubric. Grading results reference it.
    #[serde(default)]
    pub id: String,
    /// Human-readable label, e.g. "Correctness".
    #[serde(default)]
    pub criterion: String,
    #[serde(default, rename = "maxPoints")]
    pub max_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

/// A named set of scoring criteria used to grade a submission.
///
/// `global_max_points` is declared by the author; the sum of criterion max
/// points is not required to equal it. The studio keeps the two in sync as a
/// derived value, but the gateway never enforces the relationship.
///
/// Every field defaults so that the audit path can parse whatever rubric
/// object a caller sent without rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "globalMaxPoints")]
    pub global_max_points: f64,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

impl Rubric {
    /// Look up a criterion by id.
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }
}

/// A rubric held in the mock store, with id and timestamps assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRubric {
    pub id: Uuid,
    #[serde(flatten)]
    pub rubric: Rubric,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
