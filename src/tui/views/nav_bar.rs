//! Navigation bar view
//!
//! The top of the layout shell: product name plus the wizard trail with
//! the active route highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Route};

use super::BRAND;

const TRAIL: [Route; 3] = [Route::DriverLanding, Route::Company, Route::Documents];

/// Render the navigation bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut spans = vec![
        Span::styled(
            " Trippicker",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
    ];

    for (i, route) in TRAIL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ▸ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *route == app.route {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(route.title(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
