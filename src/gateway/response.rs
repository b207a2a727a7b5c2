//! Normalization of upstream response bodies.
//!
//! The upstream API can legitimately return structured output in more than one
//! representation. The shape is decided once, up front, and matched
//! exhaustively; degraded shapes become diagnostic payloads rather than
//! failures.

use serde_json::{json, Value};

/// The usable content found in an upstream 2xx body, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// The upstream already parsed the structured output (`output_parsed`).
    Parsed(Value),
    /// Text content in the first `message` item parsed as valid JSON.
    TextJson(Value),
    /// Text content was found but is not valid JSON.
    RawText(String),
    /// No usable content at all; holds the entire upstream body.
    RawResponse(Value),
}

impl ResponseShape {
    /// Classify an upstream body. First match wins:
    /// `Parsed`, then `TextJson`/`RawText`, then `RawResponse`.
    pub fn classify(body: Value) -> Self {
        if let Some(parsed) = body.get("output_parsed") {
            if !parsed.is_null() {
                return Self::Parsed(parsed.clone());
            }
        }

        // First message-typed output item, first output_text part within it.
        let text = body
            .get("output")
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| item.get("type").and_then(Value::as_str) == Some("message"))
            })
            .and_then(|message| message.get("content"))
            .and_then(Value::as_array)
            .and_then(|parts| {
                parts
                    .iter()
                    .find(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
            })
            .and_then(|part| part.get("text"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        match text {
            Some(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => Self::TextJson(value),
                Err(_) => Self::RawText(text),
            },
            None => Self::RawResponse(body),
        }
    }

    /// The JSON body the gateway returns for this shape, always with status
    /// 200: the result itself, or a `{raw}` / `{rawResponse}` diagnostic.
    pub fn into_body(self) -> Value {
        match self {
            Self::Parsed(value) | Self::TextJson(value) => value,
            Self::RawText(text) => json!({ "raw": text }),
            Self::RawResponse(body) => json!({ "rawResponse": body }),
        }
    }

    /// The grading payload, when this shape carries one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Parsed(value) | Self::TextJson(value) => Some(value),
            Self::RawText(_) | Self::RawResponse(_) => None,
        }
    }
}
