//! Prompt templates for itinerary generation and lead analysis.
//!
//! Each prompt embeds the target JSON schema so the response can be parsed
//! by [`crate::itinerary::parsing`]. The schema text and the parser must be
//! kept in sync.

/// Templates for the two generative operations.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for generating a day-wise itinerary.
    pub fn itinerary(destination: &str, nights: u32, interests: &[String]) -> String {
        let interest_line = if interests.is_empty() {
            "general sightseeing".to_string()
        } else {
            interests.join(", ")
        };

        format!(
            r#"You are a travel consultant at a destination management company.
Create a day-wise itinerary for a {nights}-night trip to {destination}.
Traveller interests: {interest_line}.

Respond with ONLY a JSON object matching this schema:

{{
  "title": "string, a short trip title",
  "days": [
    {{
      "day": 1,
      "title": "string, headline for the day",
      "description": "string, 2-3 sentences",
      "activities": ["string", "..."]
    }}
  ]
}}

The "days" array must contain exactly {day_count} entries (arrival through departure).
Do not include any text outside the JSON object."#,
            day_count = nights + 1,
        )
    }

    /// Prompt for analyzing a sales lead's free-text notes.
    pub fn lead_analysis(notes: &str) -> String {
        format!(
            r#"You are a sales assistant at a travel agency reviewing notes about a lead.

Notes:
{notes}

Respond with ONLY a JSON object matching this schema:

{{
  "sentiment": "one of: Positive, Neutral, Negative",
  "summary": "string, 1-2 sentence summary of the lead",
  "follow_ups": ["string, concrete next action", "..."]
}}

Do not include any text outside the JSON object."#,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_prompt_contains_inputs() {
        let interests = vec!["heritage".to_string(), "food".to_string()];
        let prompt = PromptTemplate::itinerary("Udaipur", 4, &interests);
        assert!(prompt.contains("Udaipur"));
        assert!(prompt.contains("4-night"));
        assert!(prompt.contains("heritage, food"));
        assert!(prompt.contains("exactly 5 entries"));
    }

    #[test]
    fn test_itinerary_prompt_default_interests() {
        let prompt = PromptTemplate::itinerary("Jaipur", 2, &[]);
        assert!(prompt.contains("general sightseeing"));
    }

    #[test]
    fn test_lead_prompt_contains_notes() {
        let prompt = PromptTemplate::lead_analysis("Asked about November availability.");
        assert!(prompt.contains("November availability"));
        assert!(prompt.contains("Positive, Neutral, Negative"));
    }
}
