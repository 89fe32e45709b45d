//! Trippicker - terminal onboarding wizard for the Trippicker courier brokerage
//!
//! This library implements the company-registration step of the Trippicker
//! onboarding wizard: a form that collects an administrator's details and,
//! for logistics companies, a fleet size with one license plate per bike.
//! Submitted registrations are staged as JSON under a fixed key so the
//! subsequent "documents" step can pick them up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and path resolution
//! - `error`: Custom error types
//! - `models`: The registration draft, plate reconciliation, and the
//!   persisted snapshot
//! - `storage`: The staged-data key/value store
//! - `services`: The submit gate over draft + store
//! - `tui`: The wizard interface (layout shell, routes, form)

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::TrippickerError;
