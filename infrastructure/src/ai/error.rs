//! Error types for the AI adapter

use thiserror::Error;
use tourdesk_application::ports::ai_gateway::GatewayError;

/// Errors that can occur when communicating with the completion endpoint
#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Missing endpoint URL in configuration")]
    MissingEndpoint,
}

impl From<AiError> for GatewayError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            AiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            AiError::BadStatus { status, body } => GatewayError::BadStatus { status, body },
            AiError::ParseError { error, .. } => GatewayError::MalformedResponse(error),
            AiError::MissingEndpoint => {
                GatewayError::NotConfigured("ai.endpoint is not set".to_string())
            }
        }
    }
}
