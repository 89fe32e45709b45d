//! Documents view
//!
//! The route after a successful registration. The document-upload step is
//! handled downstream; this view only confirms the hand-off.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::BRAND;

/// Render the documents placeholder
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Documents",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Your registration has been saved.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Document upload is the next step of onboarding.",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press q to exit.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
