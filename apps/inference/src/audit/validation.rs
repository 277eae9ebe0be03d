use serde_json::Value;

use crate::errors::AppError;

/// Top-level keys a model reply must carry to be returned.
pub const REQUIRED_KEYS: [&str; 2] = ["hallucination_triggers", "improved_prompt"];

/// Parses raw model text and checks that the required keys are present.
///
/// Only key presence is checked. Trigger count, entry shape, and extra keys
/// pass through as the model produced them. Fenced output is not unwrapped.
pub fn validate_model_output(raw: &str) -> Result<Value, AppError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|_| AppError::MalformedModelOutput {
            raw: raw.to_string(),
        })?;

    let complete = parsed
        .as_object()
        .is_some_and(|obj| REQUIRED_KEYS.iter().all(|k| obj.contains_key(*k)));

    if !complete {
        return Err(AppError::IncompleteModelOutput { parsed });
    }

    Ok(parsed)
}
