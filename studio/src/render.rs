//! Plain-text rendering of grading outcomes.
//!
//! Per-criterion feedback is joined back to criterion labels by id lookup;
//! an id the rubric does not know falls back to the raw id.

use grader_gateway::models::{GradingResult, Rubric};

use crate::client::GradeOutcome;

/// Render a grading result against the rubric it was graded with.
///
/// Example output:
/// ```text
/// Total: 80 / 100
/// ├── Correctness: +50  check the key steps again
/// └── Method: +30  clear reasoning
/// Summary: solid work overall
/// ```
pub fn render_result(rubric: &Rubric, result: &GradingResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total: {} / {}\n",
        result.total, rubric.global_max_points
    ));

    let count = result.per_criterion.len();
    for (i, score) in result.per_criterion.iter().enumerate() {
        let branch = if i + 1 == count { "└── " } else { "├── " };
        let label = rubric
            .criterion(&score.id)
            .map(|c| c.criterion.as_str())
            .unwrap_or(score.id.as_str());
        output.push_str(branch);
        output.push_str(&format!("{}: +{}", label, score.points));
        if !score.feedback.is_empty() {
            output.push_str("  ");
            output.push_str(&score.feedback);
        }
        output.push('\n');
    }

    if !result.feedback_summary.is_empty() {
        output.push_str(&format!("Summary: {}\n", result.feedback_summary));
    }

    output
}

/// Render any grade outcome, including the diagnostic shapes.
pub fn render_outcome(rubric: &Rubric, outcome: &GradeOutcome) -> String {
    match outcome {
        GradeOutcome::Graded(result) => render_result(rubric, result),
        GradeOutcome::RawText { raw } => {
            format!("The model reply could not be parsed as JSON:\n{}\n", raw)
        }
        GradeOutcome::RawResponse { raw_response } => format!(
            "The model reply contained no usable output:\n{}\n",
            raw_response
        ),
    }
}
