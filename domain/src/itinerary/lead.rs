//! Lead-note analysis result types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment classification of a lead's notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = std::convert::Infallible;

    /// Lenient parse: anything unrecognized reads as Neutral, so a sloppy
    /// model answer can never fail the analysis.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        })
    }
}

/// Result of analyzing a sales lead's free-text notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadAnalysis {
    pub sentiment: Sentiment,
    pub summary: String,
    pub follow_ups: Vec<String>,
}

impl LeadAnalysis {
    pub fn new(sentiment: Sentiment, summary: impl Into<String>) -> Self {
        Self {
            sentiment,
            summary: summary.into(),
            follow_ups: Vec::new(),
        }
    }

    pub fn with_follow_up(mut self, item: impl Into<String>) -> Self {
        self.follow_ups.push(item.into());
        self
    }

    /// The neutral placeholder returned whenever the AI boundary fails.
    /// Analysis never propagates an error to the caller.
    pub fn fallback() -> Self {
        Self::new(Sentiment::Neutral, "Analysis failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_lenient_parse() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("NEGATIVE".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert_eq!("meh".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert_eq!("".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_fallback_shape() {
        let fallback = LeadAnalysis::fallback();
        assert_eq!(fallback.sentiment, Sentiment::Neutral);
        assert_eq!(fallback.summary, "Analysis failed");
        assert!(fallback.follow_ups.is_empty());
    }
}
