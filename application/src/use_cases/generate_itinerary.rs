//! Generate Itinerary use case
//!
//! Renders the itinerary prompt, calls the AI gateway, and parses the JSON
//! response into a [`GeneratedItinerary`]. Failures propagate to the caller,
//! which surfaces them as a user-facing alert.

use crate::ports::ai_gateway::{AiGateway, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use thiserror::Error;
use tourdesk_domain::{GeneratedItinerary, PromptTemplate, parse_itinerary};
use tracing::{info, warn};

/// Errors that can occur during itinerary generation
#[derive(Error, Debug)]
pub enum GenerateItineraryError {
    #[error("Destination is required")]
    MissingDestination,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Response did not contain a valid itinerary")]
    Unparseable,
}

/// Input for the GenerateItinerary use case
#[derive(Debug, Clone)]
pub struct GenerateItineraryInput {
    pub destination: String,
    pub nights: u32,
    pub interests: Vec<String>,
}

impl GenerateItineraryInput {
    pub fn new(destination: impl Into<String>, nights: u32) -> Self {
        Self {
            destination: destination.into(),
            nights,
            interests: Vec::new(),
        }
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }
}

/// Use case for generating an itinerary through the AI boundary
pub struct GenerateItineraryUseCase<G: AiGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: AiGateway + 'static> GenerateItineraryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateItineraryInput,
    ) -> Result<GeneratedItinerary, GenerateItineraryError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateItineraryInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GeneratedItinerary, GenerateItineraryError> {
        if input.destination.trim().is_empty() {
            return Err(GenerateItineraryError::MissingDestination);
        }

        let prompt = PromptTemplate::itinerary(&input.destination, input.nights, &input.interests);

        info!(destination = %input.destination, nights = input.nights, "generating itinerary");
        progress.on_request_start("itinerary");

        let response = match self.gateway.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                progress.on_request_complete("itinerary", false);
                return Err(e.into());
            }
        };

        let parsed = parse_itinerary(&response);
        progress.on_request_complete("itinerary", parsed.is_some());

        parsed.ok_or_else(|| {
            warn!("itinerary response was not parseable JSON");
            GenerateItineraryError::Unparseable
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedGateway {
        response: Result<String, fn() -> GatewayError>,
    }

    impl CannedGateway {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(|| GatewayError::RequestFailed("boom".to_string())),
            }
        }
    }

    #[async_trait]
    impl AiGateway for CannedGateway {
        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_execute_parses_itinerary() {
        let gateway = Arc::new(CannedGateway::ok(
            r#"{"title": "Jaipur Trip", "days": [{"day": 1, "title": "Arrival", "description": ""}]}"#,
        ));
        let use_case = GenerateItineraryUseCase::new(gateway);

        let itinerary = use_case
            .execute(GenerateItineraryInput::new("Jaipur", 0))
            .await
            .unwrap();
        assert_eq!(itinerary.title, "Jaipur Trip");
    }

    #[tokio::test]
    async fn test_execute_missing_destination() {
        let gateway = Arc::new(CannedGateway::ok("{}"));
        let use_case = GenerateItineraryUseCase::new(gateway);

        let err = use_case
            .execute(GenerateItineraryInput::new("  ", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateItineraryError::MissingDestination));
    }

    #[tokio::test]
    async fn test_execute_gateway_failure_propagates() {
        let gateway = Arc::new(CannedGateway::failing());
        let use_case = GenerateItineraryUseCase::new(gateway);

        let err = use_case
            .execute(GenerateItineraryInput::new("Jaipur", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateItineraryError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_execute_unparseable_response() {
        let gateway = Arc::new(CannedGateway::ok("Sure! Here are some ideas for your trip..."));
        let use_case = GenerateItineraryUseCase::new(gateway);

        let err = use_case
            .execute(GenerateItineraryInput::new("Jaipur", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateItineraryError::Unparseable));
    }
}
