//! Transient in-memory stores and their seed data.

pub mod memory;
pub mod seed;

pub use memory::InMemoryStore;
