//! Wire types for the completion endpoint.
//!
//! The endpoint is a plain text-completion API: POST a model name and a
//! prompt, receive the generated text. Anything richer (streaming, tool
//! use) is out of scope for this boundary.

use serde::{Deserialize, Serialize};

/// Request body for a completion call.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

/// Response body from a completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
}
