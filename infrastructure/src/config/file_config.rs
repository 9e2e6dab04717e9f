//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application-layer
//! types where appropriate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourdesk_application::AgencyDefaults;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("{field} cannot be negative (got {value})")]
    NegativePercentage { field: &'static str, value: f64 },

    #[error("ai.model cannot be empty when ai.endpoint is set")]
    EmptyModelName,
}

/// Raw agency configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgencyConfig {
    pub name: String,
    /// ISO 4217 display currency.
    pub currency: String,
    pub markup_percentage: f64,
    pub iso_commission: f64,
    pub gst_percentage: f64,
}

impl Default for FileAgencyConfig {
    fn default() -> Self {
        let defaults = AgencyDefaults::default();
        Self {
            name: "tourdesk".to_string(),
            currency: defaults.currency,
            markup_percentage: defaults.markup_percentage,
            iso_commission: defaults.iso_commission,
            gst_percentage: defaults.gst_percentage,
        }
    }
}

impl FileAgencyConfig {
    /// Convert into the application-layer defaults slice.
    pub fn to_defaults(&self) -> AgencyDefaults {
        AgencyDefaults::default()
            .with_markup(self.markup_percentage)
            .with_iso_commission(self.iso_commission)
            .with_gst(self.gst_percentage)
            .with_currency(self.currency.clone())
    }
}

/// Raw AI endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAiConfig {
    /// Completion endpoint URL. Empty means AI features are unavailable.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for FileAiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            model: "gemini-3-pro-preview".to_string(),
            api_key: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw console (REPL) configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsoleConfig {
    /// Show progress indicators during AI calls
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileConsoleConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete raw configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub agency: FileAgencyConfig,
    pub ai: FileAiConfig,
    pub output: FileOutputConfig,
    pub console: FileConsoleConfig,
}

impl FileConfig {
    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("agency.markup_percentage", self.agency.markup_percentage),
            ("agency.iso_commission", self.agency.iso_commission),
            ("agency.gst_percentage", self.agency.gst_percentage),
        ] {
            if value < 0.0 {
                return Err(ConfigValidationError::NegativePercentage { field, value });
            }
        }

        if !self.ai.endpoint.is_empty() && self.ai.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        Ok(())
    }
}
