//! Configuration module for trippicker
//!
//! Provides XDG-compliant resolution of the directory where staged
//! registration data lives.

pub mod paths;

pub use paths::TrippickerPaths;
