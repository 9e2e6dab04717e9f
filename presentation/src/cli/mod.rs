//! CLI argument definitions.

pub mod commands;

pub use commands::{CatalogCollection, Cli, Command, OutputFormat};
