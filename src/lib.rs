//! Grading gateway: a thin proxy between the exam studio and an external
//! grading model.
//!
//! The gateway forwards a rubric-and-answers payload to the model API under a
//! strict output schema and normalizes whatever comes back into one of a
//! fixed set of response shapes. Scoring itself is delegated entirely to the
//! model; templates and rubrics persist only in an in-memory mock store.

pub mod api;
pub mod config;
pub mod gateway;
pub mod models;
pub mod store;
