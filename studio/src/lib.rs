//! Studio client for the grading gateway.
//!
//! No UI lives here; this crate covers the studio's obligations as a caller
//! of the gateway: field-level validation of the three data-entry forms, a
//! max total derived from the criteria list, a typed HTTP client that handles
//! every response shape the gateway can produce, and plain-text rendering of
//! grading results.

pub mod client;
pub mod forms;
pub mod render;

pub use client::{ClientError, GradeClient, GradeOutcome};
pub use forms::{CriterionForm, RubricForm, SubmissionForm, TemplateForm};
