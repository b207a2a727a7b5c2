//! Form models for the three studio data-entry surfaces.
//!
//! Field constraints mirror the prototype's client-side schemas. The rubric's
//! max total is never stored on the form: it is derived from the criteria
//! list on demand, so adding, editing or removing a criterion cannot leave a
//! stale aggregate behind.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use grader_gateway::models::{Criterion, ExamTemplate, Rubric, Submission};

// ============================================================
// Exam template
// ============================================================

/// Exam template form: title, exam text, and the attachment toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TemplateForm {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "add the exam text (at least 10 characters)"))]
    pub instructions: String,
    pub allow_attachments: bool,
    /// At most one attached file, honored only when the toggle is on.
    pub attachment: Option<String>,
}

impl TemplateForm {
    /// Convert to the wire model. The attachment is dropped when attachments
    /// are not allowed.
    pub fn into_template(self) -> ExamTemplate {
        let attachment = if self.allow_attachments {
            self.attachment
        } else {
            None
        };
        ExamTemplate {
            title: self.title,
            instructions: self.instructions,
            allow_attachments: self.allow_attachments,
            attachment,
        }
    }
}

// ============================================================
// Rubric
// ============================================================

/// One criterion row in the rubric form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CriterionForm {
    pub id: String,
    #[validate(length(min = 2, message = "criterion label is required"))]
    pub criterion: String,
    #[validate(range(min = 0.0, max = 100.0, message = "max points must be 0-100"))]
    pub max_points: f64,
    pub guidance: String,
}

impl CriterionForm {
    /// New row with a fresh id, as the add-criterion affordance creates it.
    pub fn new(criterion: impl Into<String>, max_points: f64, guidance: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            criterion: criterion.into(),
            max_points,
            guidance: guidance.into(),
        }
    }
}

/// Rubric form: a name and the criteria list.
///
/// There is no editable total field; [`RubricForm::max_total`] is the
/// aggregate, recomputed from the list every time it is asked for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rubric_form", skip_on_field_errors = false))]
pub struct RubricForm {
    #[validate(length(min = 3, message = "rubric name is required"))]
    pub name: String,
    #[validate]
    pub criteria: Vec<CriterionForm>,
}

fn validate_rubric_form(form: &RubricForm) -> Result<(), ValidationError> {
    if form.criteria.is_empty() {
        return Err(ValidationError::new("add at least one criterion"));
    }
    let total = form.max_total();
    if !(1.0..=1000.0).contains(&total) {
        return Err(ValidationError::new("total max points must be 1-1000"));
    }
    Ok(())
}

impl RubricForm {
    /// The derived max total: the sum of criterion max points.
    pub fn max_total(&self) -> f64 {
        self.criteria.iter().map(|c| c.max_points).sum()
    }

    /// Append a criterion row.
    pub fn push_criterion(&mut self, criterion: CriterionForm) {
        self.criteria.push(criterion);
    }

    /// Remove the row with the given id. Returns whether anything was removed.
    pub fn remove_criterion(&mut self, id: &str) -> bool {
        let before = self.criteria.len();
        self.criteria.retain(|c| c.id != id);
        self.criteria.len() != before
    }

    /// Convert to the wire model, stamping the derived total into
    /// `globalMaxPoints`.
    pub fn into_rubric(self) -> Rubric {
        let global_max_points = self.max_total();
        Rubric {
            name: self.name,
            global_max_points,
            criteria: self
                .criteria
                .into_iter()
                .map(|c| Criterion {
                    id: c.id,
                    criterion: c.criterion,
                    max_points: c.max_points,
                    guidance: if c.guidance.is_empty() {
                        None
                    } else {
                        Some(c.guidance)
                    },
                })
                .collect(),
        }
    }
}

// ============================================================
// Submission
// ============================================================

/// Submission form: student id, free-text answers, optional scan, sampling
/// temperature.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmissionForm {
    #[validate(length(min = 1, message = "student id is required"))]
    pub student_id: String,
    #[validate(length(min = 5, message = "enter the answers or paste the text"))]
    pub answers: String,
    pub attach_scan: Option<String>,
    #[validate(range(min = 0.0, max = 2.0, message = "temperature must be 0-2"))]
    pub temperature: f64,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            answers: String::new(),
            attach_scan: None,
            temperature: 0.2,
        }
    }
}

impl SubmissionForm {
    pub fn into_submission(self) -> Submission {
        Submission {
            student_id: self.student_id,
            answers: self.answers,
            attach_scan: self.attach_scan,
            temperature: self.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_rubric_form() -> RubricForm {
        RubricForm {
            name: "Rubric - Midterm 1".to_string(),
            criteria: vec![
                CriterionForm::new("Correctness", 50.0, "check the key steps"),
                CriterionForm::new("Method", 30.0, "score logic and clarity"),
                CriterionForm::new("Presentation", 20.0, "tidiness"),
            ],
        }
    }

    #[test]
    fn valid_forms_pass_validation() {
        assert!(valid_rubric_form().validate().is_ok());

        let template = TemplateForm {
            title: "Midterm 1".to_string(),
            instructions: "Task 1: ...\nTask 2: ...".to_string(),
            allow_attachments: false,
            attachment: None,
        };
        assert!(template.validate().is_ok());

        let submission = SubmissionForm {
            student_id: "00123".to_string(),
            answers: "Answer to task 1...".to_string(),
            ..Default::default()
        };
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn short_title_and_instructions_fail() {
        let template = TemplateForm {
            title: "ab".to_string(),
            instructions: "too short".to_string(),
            allow_attachments: false,
            attachment: None,
        };
        let errors = template.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("instructions"));
    }

    #[test]
    fn rubric_requires_at_least_one_criterion() {
        let form = RubricForm {
            name: "Rubric".to_string(),
            criteria: vec![],
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn criterion_points_outside_range_fail() {
        let mut form = valid_rubric_form();
        form.criteria[0].max_points = 150.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn temperature_outside_range_fails() {
        let form = SubmissionForm {
            student_id: "1".to_string(),
            answers: "long enough".to_string(),
            temperature: 2.5,
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("temperature"));
    }

    #[test]
    fn max_total_tracks_the_criteria_list() {
        let mut form = valid_rubric_form();
        assert_eq!(form.max_total(), 100.0);

        form.push_criterion(CriterionForm::new("Bonus", 10.0, ""));
        assert_eq!(form.max_total(), 110.0);

        let id = form.criteria[0].id.clone();
        assert!(form.remove_criterion(&id));
        assert_eq!(form.max_total(), 60.0);

        form.criteria[0].max_points = 35.0;
        assert_eq!(form.max_total(), 65.0);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut form = valid_rubric_form();
        assert!(!form.remove_criterion("nope"));
        assert_eq!(form.criteria.len(), 3);
    }

    #[test]
    fn into_rubric_stamps_the_derived_total() {
        let rubric = valid_rubric_form().into_rubric();
        assert_eq!(rubric.global_max_points, 100.0);
        assert_eq!(rubric.criteria.len(), 3);
        assert_eq!(rubric.criteria[0].guidance.as_deref(), Some("check the key steps"));
    }

    #[test]
    fn attachment_is_dropped_when_not_allowed() {
        let template = TemplateForm {
            title: "Midterm 1".to_string(),
            instructions: "Task 1: ...\nTask 2: ...".to_string(),
            allow_attachments: false,
            attachment: Some("scan.pdf".to_string()),
        };
        assert!(template.into_template().attachment.is_none());
    }
}
