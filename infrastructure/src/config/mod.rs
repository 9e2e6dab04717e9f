//! Configuration file loading.

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileAgencyConfig, FileAiConfig, FileConfig, FileConsoleConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
