// Public prompt-improvement endpoint.
// Thin proxy over the inference service: assign trace id, forward, merge.

pub mod handlers;
