//! Driver landing view
//!
//! The route before registration. Static marketing copy; pressing Enter
//! starts the company registration step.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::BRAND;

/// Render the landing page
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Drive with Trippicker",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "The courier brokerage that keeps your fleet moving.",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to register your company.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
