//! Business logic layer
//!
//! Thin services over the models and storage layers.

pub mod registration;

pub use registration::RegistrationService;
