//! Generated itinerary entities.

use serde::{Deserialize, Serialize};

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
}

impl ItineraryDay {
    pub fn new(day: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            day,
            title: title.into(),
            description: description.into(),
            activities: Vec::new(),
        }
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.push(activity.into());
        self
    }
}

/// A day-wise itinerary returned by the AI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub title: String,
    pub days: Vec<ItineraryDay>,
}

impl GeneratedItinerary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            days: Vec::new(),
        }
    }

    pub fn add_day(&mut self, day: ItineraryDay) {
        self.days.push(day);
    }

    pub fn night_count(&self) -> usize {
        self.days.len().saturating_sub(1)
    }
}
