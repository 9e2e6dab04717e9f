//! Analyze Lead use case
//!
//! Same AI boundary as itinerary generation, but with local recovery: any
//! failure — connection, bad status, unparseable output — collapses into the
//! neutral [`LeadAnalysis::fallback`] placeholder instead of an error.

use crate::ports::ai_gateway::AiGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use tourdesk_domain::{LeadAnalysis, PromptTemplate, parse_lead_analysis};
use tracing::{info, warn};

/// Input for the AnalyzeLead use case
#[derive(Debug, Clone)]
pub struct AnalyzeLeadInput {
    pub notes: String,
}

impl AnalyzeLeadInput {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
        }
    }
}

/// Use case for analyzing lead notes through the AI boundary.
///
/// Infallible by contract: the return type has no error branch.
pub struct AnalyzeLeadUseCase<G: AiGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: AiGateway + 'static> AnalyzeLeadUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AnalyzeLeadInput) -> LeadAnalysis {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AnalyzeLeadInput,
        progress: &dyn ProgressNotifier,
    ) -> LeadAnalysis {
        if input.notes.trim().is_empty() {
            return LeadAnalysis::fallback();
        }

        let prompt = PromptTemplate::lead_analysis(&input.notes);

        info!("analyzing lead notes");
        progress.on_request_start("lead analysis");

        let analysis = match self.gateway.generate(&prompt).await {
            Ok(response) => parse_lead_analysis(&response),
            Err(e) => {
                warn!(error = %e, "lead analysis request failed");
                None
            }
        };

        progress.on_request_complete("lead analysis", analysis.is_some());
        analysis.unwrap_or_else(LeadAnalysis::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ai_gateway::GatewayError;
    use async_trait::async_trait;
    use tourdesk_domain::Sentiment;

    struct CannedGateway {
        response: Option<String>,
    }

    #[async_trait]
    impl AiGateway for CannedGateway {
        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            match &self.response {
                Some(text) => Ok(text.clone()),
                None => Err(GatewayError::ConnectionError("down".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_successful_analysis() {
        let gateway = Arc::new(CannedGateway {
            response: Some(
                r#"{"sentiment": "Positive", "summary": "Hot lead.", "follow_ups": ["Call back"]}"#
                    .to_string(),
            ),
        });
        let use_case = AnalyzeLeadUseCase::new(gateway);

        let analysis = use_case
            .execute(AnalyzeLeadInput::new("Very keen on a honeymoon package"))
            .await;
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.follow_ups, vec!["Call back".to_string()]);
    }

    #[tokio::test]
    async fn test_gateway_failure_yields_fallback() {
        let gateway = Arc::new(CannedGateway { response: None });
        let use_case = AnalyzeLeadUseCase::new(gateway);

        let analysis = use_case.execute(AnalyzeLeadInput::new("notes")).await;
        assert_eq!(analysis, LeadAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_unparseable_response_yields_fallback() {
        let gateway = Arc::new(CannedGateway {
            response: Some("The lead seems nice.".to_string()),
        });
        let use_case = AnalyzeLeadUseCase::new(gateway);

        let analysis = use_case.execute(AnalyzeLeadInput::new("notes")).await;
        assert_eq!(analysis.summary, "Analysis failed");
    }

    #[tokio::test]
    async fn test_empty_notes_short_circuit() {
        let gateway = Arc::new(CannedGateway { response: None });
        let use_case = AnalyzeLeadUseCase::new(gateway);

        let analysis = use_case.execute(AnalyzeLeadInput::new("   ")).await;
        assert_eq!(analysis, LeadAnalysis::fallback());
    }
}
