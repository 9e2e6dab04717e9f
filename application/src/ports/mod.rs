//! Ports: interfaces the application layer needs the outside world to
//! implement.

pub mod ai_gateway;
pub mod entity_store;
pub mod progress;
