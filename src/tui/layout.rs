//! Layout definitions for the TUI
//!
//! The layout shell: a navigation bar and footer rendered around every
//! route's content.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions shared by every route
pub struct ShellLayout {
    /// Navigation bar at the top
    pub nav_bar: Rect,
    /// Content area for the active route
    pub content: Rect,
    /// Footer at the bottom (key hints, status)
    pub footer: Rect,
}

impl ShellLayout {
    /// Calculate the shell layout from the available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nav bar
                Constraint::Min(5),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            nav_bar: vertical[0],
            content: vertical[1],
            footer: vertical[2],
        }
    }
}
