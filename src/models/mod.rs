//! Core data models for trippicker
//!
//! The registration draft (in-memory form state), the plate-list
//! reconciliation rule, and the persisted driver snapshot.

pub mod gender;
pub mod registration;
pub mod snapshot;

pub use gender::Gender;
pub use registration::{reconcile_plates, RegistrationDraft};
pub use snapshot::{DriverSnapshot, STAGE_KEY};
