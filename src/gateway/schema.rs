//! Structured-output schema and upstream request construction.
//!
//! The schema is the gateway's defense against model output drift: the
//! upstream API is told to produce exactly a grading result and nothing else.

use serde_json::{json, Value};

use crate::config::GatewayConfig;

/// Fixed system instruction for every grading call.
pub const SYSTEM_PROMPT: &str =
    "You are an impartial exam grader. Score strictly by rubric and return ONLY JSON.";

/// Name the upstream API associates with the schema constraint.
pub const SCHEMA_NAME: &str = "grading_result";

/// The strict output schema for a grading result.
///
/// Top level requires exactly `total`, `perCriterion` and `feedbackSummary`;
/// each `perCriterion` entry requires exactly `id`, `points` and `feedback`.
/// `additionalProperties: false` at both levels forbids anything extra.
pub fn grading_result_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "total": { "type": "number" },
            "perCriterion": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "id": { "type": "string" },
                        "points": { "type": "number" },
                        "feedback": { "type": "string" }
                    },
                    "required": ["id", "points", "feedback"]
                }
            },
            "feedbackSummary": { "type": "string" }
        },
        "required": ["total", "perCriterion", "feedbackSummary"]
    })
}

/// Build the upstream request body for one grading call.
///
/// The user message content is the JSON-serialized `{rubric, answers}` pair.
/// An absent rubric is omitted from the payload rather than sent as null.
pub fn build_request_body(
    config: &GatewayConfig,
    rubric: Option<&Value>,
    answers: &str,
) -> Result<Value, serde_json::Error> {
    let mut user_payload = serde_json::Map::new();
    if let Some(rubric) = rubric {
        user_payload.insert("rubric".to_string(), rubric.clone());
    }
    user_payload.insert("answers".to_string(), Value::String(answers.to_string()));
    let user_content = serde_json::to_string(&Value::Object(user_payload))?;

    Ok(json!({
        "model": config.model,
        "input": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_content }
        ],
        "text": {
            "format": {
                "type": "json_schema",
                "name": SCHEMA_NAME,
                "schema": grading_result_schema()
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig::new("test-key", "http://upstream.test/v1")
    }

    #[test]
    fn schema_forbids_extra_fields_at_both_levels() {
        let schema = grading_result_schema();
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(
            schema["properties"]["perCriterion"]["items"]["additionalProperties"],
            false
        );
        assert_eq!(
            schema["properties"]["perCriterion"]["items"]["required"],
            json!(["id", "points", "feedback"])
        );
        assert_eq!(
            schema["required"],
            json!(["total", "perCriterion", "feedbackSummary"])
        );
    }

    #[test]
    fn user_message_carries_serialized_rubric_and_answers() {
        let rubric = json!({ "criteria": [{ "id": "c1", "maxPoints": 50 }] });
        let body = build_request_body(&config(), Some(&rubric), "x=5").unwrap();

        let content = body["input"][1]["content"].as_str().unwrap();
        let parsed: Value = serde_json::from_str(content).unwrap();
        assert_eq!(parsed["rubric"], rubric);
        assert_eq!(parsed["answers"], "x=5");
    }

    #[test]
    fn absent_rubric_is_omitted_from_the_user_message() {
        let body = build_request_body(&config(), None, "").unwrap();

        let content = body["input"][1]["content"].as_str().unwrap();
        let parsed: Value = serde_json::from_str(content).unwrap();
        assert!(parsed.get("rubric").is_none());
        assert_eq!(parsed["answers"], "");
    }

    #[test]
    fn request_pins_model_and_schema_constraint() {
        let body = build_request_body(&config(), None, "answer").unwrap();
        assert_eq!(body["model"], "gpt-5-nano");
        assert_eq!(body["input"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["text"]["format"]["type"], "json_schema");
        assert_eq!(body["text"]["format"]["name"], SCHEMA_NAME);
        assert_eq!(body["text"]["format"]["schema"], grading_result_schema());
    }
}
