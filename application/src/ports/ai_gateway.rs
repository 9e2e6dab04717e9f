//! AI Gateway port
//!
//! Defines the interface for the generative-AI completion endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during AI gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Endpoint returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Gateway not configured: {0}")]
    NotConfigured(String),
}

/// Gateway to the generative-AI text completion endpoint.
///
/// The boundary is a single fire-and-wait request/response: no retries, no
/// client-side timeout, no partial results. Implementations (adapters) live
/// in the infrastructure layer.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Send a prompt and wait for the complete text response.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
