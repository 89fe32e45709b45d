//! Reusable widgets for the TUI

pub mod alert;

pub use alert::{alert_area, AlertDialog};
