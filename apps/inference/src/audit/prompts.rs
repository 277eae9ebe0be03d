// Prompt audit LLM prompt templates.
// All prompts for the audit module are defined here.

use crate::llm_client::ChatMessage;

/// Sampling temperature for audit calls. Kept low so the model follows the
/// output rules rather than improvising.
pub const AUDIT_TEMPERATURE: f32 = 0.2;

/// Label that separates the caller's prompt from the instruction.
pub const USER_PROMPT_LABEL: &str = "USER_PROMPT:";

pub const AUDIT_SYSTEM: &str = r#"You are a prompt auditor. Your job is to diagnose why a prompt will cause hallucination,
and rewrite it into a safer prompt that minimizes hallucination.

Return STRICT JSON ONLY in exactly this shape:
{
  "hallucination_triggers": [
    {"issue":"...", "why":"..."}
  ],
  "improved_prompt": "..."
}

Rules:
- hallucination_triggers: 3 to 7 items
- Issues must be concrete (e.g., missing date/source, ambiguous entity, undefined scope, asks for latest/current, requires external data, invites guessing).
- improved_prompt must be a rewritten version of the user's prompt:
  - asks for needed missing info (as questions) OR requires the user to provide sources/context
  - forbids guessing
  - demands citations or says "only use provided context" if context is supplied
- No markdown. No extra keys. No commentary outside JSON."#;

/// Builds the two-turn conversation for auditing `prompt`.
/// Pure: the same prompt always yields the same messages.
pub fn build_audit_messages(prompt: &str) -> [ChatMessage; 2] {
    [
        ChatMessage::system(AUDIT_SYSTEM),
        ChatMessage::user(format!("{USER_PROMPT_LABEL}\n{prompt}")),
    ]
}
