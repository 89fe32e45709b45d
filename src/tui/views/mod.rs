//! TUI views module
//!
//! The layout shell (nav bar, footer) and the three wizard routes.

pub mod company;
pub mod documents;
pub mod footer;
pub mod landing;
pub mod nav_bar;

use ratatui::style::Color;
use ratatui::Frame;

use super::app::{App, Route};
use super::layout::ShellLayout;
use super::widgets::alert::{alert_area, AlertDialog};

/// Trippicker brand purple (#5800FF)
pub(crate) const BRAND: Color = Color::Rgb(0x58, 0x00, 0xFF);

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = ShellLayout::new(frame.area());

    // The shell wraps every route
    nav_bar::render(frame, app, layout.nav_bar);

    match app.route {
        Route::DriverLanding => landing::render(frame, layout.content),
        Route::Company => company::render(frame, app, layout.content),
        Route::Documents => documents::render(frame, layout.content),
    }

    footer::render(frame, app, layout.footer);

    // The blocking alert paints over everything until acknowledged
    if let Some(message) = app.alert.clone() {
        let area = alert_area(frame.area());
        frame.render_widget(AlertDialog::new(&message), area);
    }
}
