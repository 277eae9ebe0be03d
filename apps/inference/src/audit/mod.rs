// Prompt audit: the one request flow this service exists for.
// validate request -> build messages -> call model -> check output shape -> return.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
