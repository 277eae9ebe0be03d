use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, FieldError};

/// Upper bound on prompt length, in characters.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Raw request body as deserialized by the `Json` extractor.
#[derive(Debug, Deserialize)]
pub struct ImproveRequestBody {
    pub prompt: String,
}

/// A request that passed validation. Holds the trimmed prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveRequest {
    prompt: String,
}

impl ImproveRequest {
    /// Length is checked on the prompt as sent (characters, not bytes),
    /// then the prompt is trimmed and must still be non-empty.
    pub fn validate(body: ImproveRequestBody) -> Result<Self, AppError> {
        let len = body.prompt.chars().count();
        if len == 0 {
            return Err(AppError::InvalidRequest(FieldError::prompt(
                "string_too_short",
                "String should have at least 1 character",
            )));
        }
        if len > MAX_PROMPT_CHARS {
            return Err(AppError::InvalidRequest(FieldError::prompt(
                "string_too_long",
                format!("String should have at most {MAX_PROMPT_CHARS} characters"),
            )));
        }

        let trimmed = body.prompt.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidRequest(FieldError::prompt(
                "value_error",
                "prompt must not be blank",
            )));
        }

        Ok(Self {
            prompt: trimmed.to_string(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// One reason a prompt is likely to make a model fabricate information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub issue: String,
    pub why: String,
}

/// The response shape the model is instructed to produce.
///
/// The handler passes the model's object through untyped; this type is the
/// strict view for callers that want field types checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImproveResponse {
    pub hallucination_triggers: Vec<Trigger>,
    pub improved_prompt: String,
}

impl ImproveResponse {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(prompt: &str) -> ImproveRequestBody {
        ImproveRequestBody {
            prompt: prompt.to_string(),
        }
    }

    fn rejected_kind(prompt: &str) -> &'static str {
        match ImproveRequest::validate(body(prompt)) {
            Err(AppError::InvalidRequest(field)) => field.kind,
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_single_character() {
        let req = ImproveRequest::validate(body("x")).unwrap();
        assert_eq!(req.prompt(), "x");
    }

    #[test]
    fn test_accepts_exactly_max_length() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS);
        assert!(ImproveRequest::validate(body(&prompt)).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(rejected_kind(""), "string_too_short");
    }

    #[test]
    fn test_rejects_over_max_length() {
        let prompt = "a".repeat(MAX_PROMPT_CHARS + 1);
        assert_eq!(rejected_kind(&prompt), "string_too_long");
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert_eq!(rejected_kind("   \n\t "), "value_error");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 12000 two-byte characters is within bounds.
        let prompt = "é".repeat(MAX_PROMPT_CHARS);
        assert!(ImproveRequest::validate(body(&prompt)).is_ok());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let req = ImproveRequest::validate(body("  Who is the CEO?\n")).unwrap();
        assert_eq!(req.prompt(), "Who is the CEO?");
    }

    #[test]
    fn test_strict_view_accepts_well_formed_response() {
        let v = json!({
            "hallucination_triggers": [{"issue": "No date", "why": "Facts change"}],
            "improved_prompt": "As of which date?"
        });
        let r = ImproveResponse::from_value(&v).unwrap();
        assert_eq!(r.hallucination_triggers.len(), 1);
        assert_eq!(r.hallucination_triggers[0].issue, "No date");
    }

    #[test]
    fn test_strict_view_rejects_wrong_field_types() {
        let v = json!({"hallucination_triggers": "none", "improved_prompt": 3});
        assert!(ImproveResponse::from_value(&v).is_err());
    }
}
