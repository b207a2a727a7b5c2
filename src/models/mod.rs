//! Domain models for the grading gateway.
//!
//! # Core Concepts
//!
//! ## Request/response values
//!
//! - [`Rubric`]: a named set of scoring criteria with point weights.
//! - [`Submission`]: a student's free-text answers plus sampling settings.
//! - [`GradingResult`]: the normalized grading output: a total, per-criterion
//!   scores, and an overall feedback summary.
//!
//! All three are transient: they live for the duration of one grading call.
//!
//! ## Stored entities
//!
//! - [`SavedTemplate`] and [`SavedRubric`]: exam templates and rubrics with an
//!   id and timestamps, held in the in-memory mock store. Nothing survives the
//!   process.

mod grading;
mod rubric;
mod submission;
mod template;

pub use grading::*;
pub use rubric::*;
pub use submission::*;
pub use template::*;
