//! Terminal User Interface module
//!
//! The onboarding wizard rendered with ratatui: a layout shell (nav bar,
//! content, footer) around three linear routes, with the company
//! registration form as the working step.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_wizard;
