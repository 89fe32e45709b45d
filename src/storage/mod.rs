//! Staged-data storage for trippicker
//!
//! A small key/value store standing in for the browser's localStorage:
//! the wizard writes the registration snapshot under a fixed key, and the
//! downstream documents step reads it back. The store is injected into the
//! wizard rather than reached through a global, so tests can substitute an
//! in-memory fake.

pub mod stage;

pub use stage::{JsonStageStore, MemoryStageStore, StageStore};
