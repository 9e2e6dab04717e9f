//! HTTP adapter for the generative-AI completion endpoint.

pub mod error;
pub mod gateway;
pub mod types;

pub use gateway::{AiEndpointConfig, HttpAiGateway};
