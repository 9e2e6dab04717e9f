//! AI Gateway implementation over HTTP.

use crate::ai::error::AiError;
use crate::ai::types::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use tourdesk_application::ports::ai_gateway::{AiGateway, GatewayError};
use tracing::{debug, info};

/// Connection settings for the completion endpoint.
#[derive(Debug, Clone)]
pub struct AiEndpointConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl AiEndpointConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// [`AiGateway`] adapter for an HTTP completion endpoint.
///
/// One request, one response: no retry, no client-side timeout, no partial
/// results. Failures are reported to the caller, which decides between an
/// alert and a neutral fallback.
pub struct HttpAiGateway {
    client: reqwest::Client,
    config: AiEndpointConfig,
}

impl HttpAiGateway {
    pub fn new(config: AiEndpointConfig) -> Result<Self, AiError> {
        if config.endpoint.trim().is_empty() {
            return Err(AiError::MissingEndpoint);
        }

        info!(endpoint = %config.endpoint, model = %config.model, "HttpAiGateway initialized");

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
        };

        debug!(chars = prompt.len(), "sending completion request");

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| AiError::ParseError {
                error: e.to_string(),
                raw: body.clone(),
            })?;

        debug!(chars = parsed.text.len(), "completion response received");

        Ok(parsed.text)
    }
}

#[async_trait]
impl AiGateway for HttpAiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.complete(prompt).await.map_err(GatewayError::from)
    }
}
