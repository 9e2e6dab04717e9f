//! Infrastructure layer for tourdesk
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: transient in-memory stores, the HTTP AI gateway, and
//! configuration file loading.

pub mod ai;
pub mod config;
pub mod stores;

// Re-export commonly used types
pub use ai::{AiEndpointConfig, HttpAiGateway, error::AiError};
pub use config::{
    ConfigLoader, FileAgencyConfig, FileAiConfig, FileConfig, FileConsoleConfig, FileOutputConfig,
};
pub use stores::{InMemoryStore, seed};
