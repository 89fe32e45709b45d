//! Blocking alert widget
//!
//! The TUI counterpart of the browser's alert(): a modal message box the
//! user must acknowledge before any other input is handled.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// A modal alert with a single acknowledgement action
pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    /// Create a new alert dialog
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Alert ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Acknowledge hint
            ])
            .split(inner);

        let message = Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        message.render(chunks[0], buf);

        let hint = Paragraph::new("Press Enter or Esc to continue")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        hint.render(chunks[1], buf);
    }
}

/// Calculate the alert's area (centered in the parent)
pub fn alert_area(parent: Rect) -> Rect {
    let width = (parent.width * 60 / 100).clamp(30, 60).min(parent.width);
    let height = 7.min(parent.height);

    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
