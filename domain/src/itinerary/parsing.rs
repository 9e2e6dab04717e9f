//! Parsing AI responses into itinerary and lead-analysis entities.
//!
//! Models are asked for JSON but frequently wrap it in prose or a fenced
//! code block. Extraction therefore scans for ` ```json` fences first and
//! falls back to treating the whole response as raw JSON.

use crate::itinerary::generated::{GeneratedItinerary, ItineraryDay};
use crate::itinerary::lead::{LeadAnalysis, Sentiment};

/// Parse an itinerary from model response text.
///
/// Supports two formats:
/// 1. ` ```json` fenced code blocks containing the itinerary object
/// 2. Raw JSON (the entire response is valid JSON)
///
/// Returns `None` if no valid itinerary is found or if it has no days.
pub fn parse_itinerary(response: &str) -> Option<GeneratedItinerary> {
    for block in fenced_json_blocks(response) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&block)
            && let Some(itinerary) = parse_itinerary_json(&parsed)
        {
            return Some(itinerary);
        }
    }

    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response) {
        return parse_itinerary_json(&parsed);
    }

    None
}

/// Parse an itinerary from a JSON value.
///
/// Expected schema:
/// ```json
/// {
///   "title": "string",
///   "days": [
///     {
///       "day": 1,
///       "title": "string",
///       "description": "string",
///       "activities": ["string", ...]
///     }
///   ]
/// }
/// ```
///
/// Returns `None` if `days` is missing or empty.
pub fn parse_itinerary_json(json: &serde_json::Value) -> Option<GeneratedItinerary> {
    let title = json.get("title").and_then(|v| v.as_str()).unwrap_or("Itinerary");
    let days = json.get("days").and_then(|v| v.as_array())?;

    if days.is_empty() {
        return None;
    }

    let mut itinerary = GeneratedItinerary::new(title);

    for (index, day_json) in days.iter().enumerate() {
        let number = day_json
            .get("day")
            .and_then(|v| v.as_u64())
            .unwrap_or(index as u64 + 1) as u32;
        let day_title = day_json
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("Untitled day");
        let description = day_json
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("");

        let mut day = ItineraryDay::new(number, day_title, description);

        if let Some(activities) = day_json.get("activities").and_then(|v| v.as_array()) {
            for activity in activities {
                if let Some(text) = activity.as_str() {
                    day = day.with_activity(text);
                }
            }
        }

        itinerary.add_day(day);
    }

    Some(itinerary)
}

/// Parse a lead analysis from model response text.
///
/// Accepts the same fenced-or-raw JSON shapes as [`parse_itinerary`].
/// Returns `None` when nothing parseable is found; callers substitute
/// [`LeadAnalysis::fallback`] at the boundary.
pub fn parse_lead_analysis(response: &str) -> Option<LeadAnalysis> {
    for block in fenced_json_blocks(response) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&block)
            && let Some(analysis) = parse_lead_json(&parsed)
        {
            return Some(analysis);
        }
    }

    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response) {
        return parse_lead_json(&parsed);
    }

    None
}

fn parse_lead_json(json: &serde_json::Value) -> Option<LeadAnalysis> {
    let summary = json.get("summary").and_then(|v| v.as_str())?;
    let sentiment: Sentiment = json
        .get("sentiment")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .parse()
        .unwrap_or_default();

    let mut analysis = LeadAnalysis::new(sentiment, summary);

    if let Some(items) = json.get("follow_ups").and_then(|v| v.as_array()) {
        for item in items {
            if let Some(text) = item.as_str() {
                analysis = analysis.with_follow_up(text);
            }
        }
    }

    Some(analysis)
}

/// Collect the contents of ` ```json` fenced blocks, in order of appearance.
fn fenced_json_blocks(response: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current = String::new();

    for line in response.lines() {
        if line.trim() == "```json" {
            in_block = true;
            current.clear();
        } else if in_block && line.trim() == "```" {
            in_block = false;
            blocks.push(current.clone());
        } else if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_itinerary_from_fenced_block() {
        let response = r#"
Here is your itinerary:

```json
{
  "title": "Udaipur Getaway",
  "days": [
    {"day": 1, "title": "Arrival", "description": "Pickup and check-in", "activities": ["Sunset at Fateh Sagar"]},
    {"day": 2, "title": "City Palace", "description": "Full day tour", "activities": ["City Palace", "Jagdish Temple"]}
  ]
}
```
"#;

        let itinerary = parse_itinerary(response).unwrap();
        assert_eq!(itinerary.title, "Udaipur Getaway");
        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.days[1].activities.len(), 2);
    }

    #[test]
    fn test_parse_itinerary_raw_json() {
        let response =
            r#"{"title": "Quick Trip", "days": [{"day": 1, "title": "Only day", "description": ""}]}"#;
        let itinerary = parse_itinerary(response).unwrap();
        assert_eq!(itinerary.days.len(), 1);
    }

    #[test]
    fn test_parse_itinerary_plain_text_returns_none() {
        let response = "I'd be happy to plan a trip! Could you tell me more about your dates?";
        assert!(parse_itinerary(response).is_none());
    }

    #[test]
    fn test_parse_itinerary_empty_days_returns_none() {
        let response = r#"{"title": "Nothing", "days": []}"#;
        assert!(parse_itinerary(response).is_none());
    }

    #[test]
    fn test_parse_itinerary_missing_day_numbers_get_sequential() {
        let response = r#"{"days": [{"title": "A", "description": ""}, {"title": "B", "description": ""}]}"#;
        let itinerary = parse_itinerary(response).unwrap();
        assert_eq!(itinerary.title, "Itinerary");
        assert_eq!(itinerary.days[0].day, 1);
        assert_eq!(itinerary.days[1].day, 2);
    }

    #[test]
    fn test_parse_lead_analysis() {
        let response = r#"```json
{
  "sentiment": "Positive",
  "summary": "Family of four, keen on a November Rajasthan trip.",
  "follow_ups": ["Send sample itinerary", "Confirm budget range"]
}
```"#;
        let analysis = parse_lead_analysis(response).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.follow_ups.len(), 2);
    }

    #[test]
    fn test_parse_lead_unknown_sentiment_reads_neutral() {
        let response = r#"{"sentiment": "enthusiastic!!", "summary": "Warm lead."}"#;
        let analysis = parse_lead_analysis(response).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_parse_lead_missing_summary_returns_none() {
        let response = r#"{"sentiment": "Positive"}"#;
        assert!(parse_lead_analysis(response).is_none());
    }

    #[test]
    fn test_second_fenced_block_wins_when_first_invalid() {
        let response = "```json\nnot json at all\n```\n```json\n{\"summary\": \"ok\"}\n```";
        let analysis = parse_lead_analysis(response).unwrap();
        assert_eq!(analysis.summary, "ok");
    }
}
