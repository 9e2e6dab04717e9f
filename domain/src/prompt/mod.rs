//! Prompt templates for the AI boundary.

pub mod template;

pub use template::PromptTemplate;
