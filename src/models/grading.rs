use serde::{Deserialize, Serialize};

use crate::models::Rubric;

/// Awarded points and feedback for one rubric criterion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriterionScore {
    pub id: String,
    pub points: f64,
    pub feedback: String,
}

/// The normalized grading output returned by the external model.
///
/// The model is trusted, not verified: per-criterion ids are expected to
/// reference the submitted rubric and points are expected to stay within each
/// criterion's max, but neither is enforced. [`GradingResult::audit`] reports
/// violations without rejecting them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradingResult {
    pub total: f64,
    #[serde(rename = "perCriterion")]
    pub per_criterion: Vec<CriterionScore>,
    #[serde(rename = "feedbackSummary")]
    pub feedback_summary: String,
}

/// A discrepancy between a grading result and the rubric it was graded
/// against. Findings are logged, never turned into failures.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditFinding {
    /// The result scored a criterion id the rubric does not contain.
    UnknownCriterion { id: String },
    /// Awarded points exceed the criterion's declared max.
    PointsExceedMax { id: String, points: f64, max: f64 },
    /// A rubric criterion received no score at all.
    UnscoredCriterion { id: String },
}

impl std::fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCriterion { id } => {
                write!(f, "criterion '{}' is not in the rubric", id)
            }
            Self::PointsExceedMax { id, points, max } => {
                write!(f, "criterion '{}' awarded {} points (max {})", id, points, max)
            }
            Self::UnscoredCriterion { id } => {
                write!(f, "criterion '{}' was not scored", id)
            }
        }
    }
}

impl GradingResult {
    /// Check a result against the rubric it was graded with.
    ///
    /// Returns one finding per unknown id, per over-max score, and per rubric
    /// criterion left unscored. An empty vec means the model stayed within the
    /// rubric.
    pub fn audit(&self, rubric: &Rubric) -> Vec<AuditFinding> {
        let mut findings = Vec::new();

        for score in &self.per_criterion {
            match rubric.criterion(&score.id) {
                Some(criterion) => {
                    if score.points > criterion.max_points {
                        findings.push(AuditFinding::PointsExceedMax {
                            id: score.id.clone(),
                            points: score.points,
                            max: criterion.max_points,
                        });
                    }
                }
                None => findings.push(AuditFinding::UnknownCriterion {
                    id: score.id.clone(),
                }),
            }
        }

        for criterion in &rubric.criteria {
            if !self.per_criterion.iter().any(|s| s.id == criterion.id) {
                findings.push(AuditFinding::UnscoredCriterion {
                    id: criterion.id.clone(),
                });
            }
        }

        findings
    }
}
