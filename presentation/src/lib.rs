//! Presentation layer for tourdesk
//!
//! This crate contains CLI definitions, console output formatters,
//! progress reporters, and the interactive admin console.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{CatalogCollection, Cli, Command, OutputFormat};
pub use console::AdminConsole;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
