//! Company registration view
//!
//! The working step of the wizard: collects the admin's details and, when
//! they own a logistics company, a fleet size plus one license plate per
//! bike. The plate inputs track the fleet size; validation runs on submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Gender, RegistrationDraft};
use crate::tui::app::{App, Route};

use super::BRAND;

/// Digit limit for the fleet-size input (an input-surface cap of 99,
/// like the form's minimum of 1; the model itself only enforces >= 1)
const MAX_FLEET_DIGITS: usize = 2;

/// Which field is currently focused in the company form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyField {
    #[default]
    FirstName,
    Email,
    Gender,
    ReferralCode,
    LogisticsToggle,
    FleetSize,
    Plate(usize),
}

/// State for the company registration form
#[derive(Debug, Clone)]
pub struct CompanyFormState {
    /// The draft every field edits into
    pub draft: RegistrationDraft,

    /// Currently focused field
    pub focused: CompanyField,

    /// Cursor position (in chars) within the focused text field
    pub cursor: usize,

    /// Digit buffer for the fleet-size field; may be transiently empty
    /// while the user retypes, the draft itself never drops below 1
    pub fleet_input: String,

    /// First plate row currently in view
    pub plate_scroll: usize,
}

impl Default for CompanyFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyFormState {
    /// Create a fresh form with the draft's default values
    pub fn new() -> Self {
        Self {
            draft: RegistrationDraft::new(),
            focused: CompanyField::FirstName,
            cursor: 0,
            fleet_input: "1".to_string(),
            plate_scroll: 0,
        }
    }

    /// Focus order, top to bottom. Fleet fields drop out of the cycle
    /// while the logistics toggle is off.
    fn field_order(&self) -> Vec<CompanyField> {
        let mut order = vec![
            CompanyField::FirstName,
            CompanyField::Email,
            CompanyField::Gender,
            CompanyField::ReferralCode,
            CompanyField::LogisticsToggle,
        ];
        if self.draft.logistics_owner() {
            order.push(CompanyField::FleetSize);
            for index in 0..self.draft.fleet_size() {
                order.push(CompanyField::Plate(index));
            }
        }
        order
    }

    /// Move to the next field (Tab)
    pub fn next_field(&mut self) {
        self.step_focus(1);
    }

    /// Move to the previous field (Shift+Tab)
    pub fn prev_field(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let order = self.field_order();
        let pos = order
            .iter()
            .position(|field| *field == self.focused)
            .unwrap_or(0);
        let len = order.len() as isize;
        let next = (pos as isize + delta).rem_euclid(len) as usize;
        self.set_focus(order[next]);
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: CompanyField) {
        if self.focused == CompanyField::FleetSize && field != CompanyField::FleetSize {
            // Leaving the fleet field resyncs the buffer with the clamped
            // model value (an empty or "0" buffer reads back as 1)
            self.fleet_input = self.draft.fleet_size().to_string();
        }
        self.focused = field;
        self.cursor = self.focused_text().map(char_len).unwrap_or(0);
    }

    /// The focused field's text, when it is a free-text field
    pub fn focused_text(&self) -> Option<&str> {
        match self.focused {
            CompanyField::FirstName => Some(self.draft.first_name()),
            CompanyField::Email => Some(self.draft.email()),
            CompanyField::ReferralCode => Some(self.draft.referral_code()),
            CompanyField::Plate(index) => {
                self.draft.license_plates().get(index).map(String::as_str)
            }
            _ => None,
        }
    }

    fn apply_text(&mut self, value: String) {
        match self.focused {
            CompanyField::FirstName => self.draft.set_first_name(value),
            CompanyField::Email => self.draft.set_email(value),
            CompanyField::ReferralCode => self.draft.set_referral_code(value),
            CompanyField::Plate(index) => self.draft.set_license_plate(index, value),
            _ => {}
        }
    }

    /// Insert a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        if self.focused == CompanyField::FleetSize {
            if c.is_ascii_digit() && self.fleet_input.len() < MAX_FLEET_DIGITS {
                self.fleet_input.push(c);
                self.commit_fleet_input();
            }
            return;
        }

        let Some(text) = self.focused_text() else {
            return;
        };
        let updated = insert_at(text, self.cursor, c);
        self.cursor += 1;
        self.apply_text(updated);
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.focused == CompanyField::FleetSize {
            self.fleet_input.pop();
            self.commit_fleet_input();
            return;
        }

        if self.cursor == 0 {
            return;
        }
        let Some(text) = self.focused_text() else {
            return;
        };
        let updated = remove_at(text, self.cursor - 1);
        self.cursor -= 1;
        self.apply_text(updated);
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        let Some(text) = self.focused_text() else {
            return;
        };
        if self.cursor < char_len(text) {
            let updated = remove_at(text, self.cursor);
            self.apply_text(updated);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        let max = self.focused_text().map(char_len).unwrap_or(0);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.focused_text().map(char_len).unwrap_or(0);
    }

    /// Parse the digit buffer into the draft; the draft clamps to >= 1
    fn commit_fleet_input(&mut self) {
        let size = self.fleet_input.parse::<usize>().unwrap_or(1);
        self.draft.set_fleet_size(size);
        self.clamp_plate_scroll();
    }

    /// Step the fleet size up or down (the numeric input's spinner)
    pub fn bump_fleet(&mut self, delta: i64) {
        let next = (self.draft.fleet_size() as i64 + delta).clamp(1, 99) as usize;
        self.draft.set_fleet_size(next);
        self.fleet_input = next.to_string();
        self.clamp_plate_scroll();
    }

    fn clamp_plate_scroll(&mut self) {
        let last = self.draft.fleet_size().saturating_sub(1);
        self.plate_scroll = self.plate_scroll.min(last);
    }

    /// Cycle the gender selection (Up/Down on the select)
    pub fn cycle_gender(&mut self, forward: bool) {
        let all = Gender::ALL;
        let next = match self.draft.gender() {
            None => {
                if forward {
                    all[0]
                } else {
                    all[all.len() - 1]
                }
            }
            Some(current) => {
                let idx = all.iter().position(|g| *g == current).unwrap_or(0);
                let next_idx = if forward {
                    (idx + 1) % all.len()
                } else {
                    (idx + all.len() - 1) % all.len()
                };
                all[next_idx]
            }
        };
        self.draft.set_gender(next);
    }

    /// Flip the logistics-owner checkbox; fleet data is kept either way
    pub fn toggle_logistics(&mut self) {
        let owner = !self.draft.logistics_owner();
        self.draft.set_logistics_owner(owner);
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn insert_at(s: &str, idx: usize, c: char) -> String {
    let mut out = String::with_capacity(s.len() + c.len_utf8());
    let mut inserted = false;
    for (i, ch) in s.chars().enumerate() {
        if i == idx {
            out.push(c);
            inserted = true;
        }
        out.push(ch);
    }
    if !inserted {
        out.push(c);
    }
    out
}

fn remove_at(s: &str, idx: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, ch)| ch)
        .collect()
}

/// Handle key input for the company form
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Prev: back to the landing page, no validation, draft discarded
        KeyCode::Esc => {
            app.navigate(Route::DriverLanding);
            return;
        }
        // Next: the submit gate
        KeyCode::Enter => {
            app.submit_company();
            return;
        }
        _ => {}
    }

    let form = &mut app.form;
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }
        KeyCode::BackTab => form.prev_field(),

        KeyCode::Up => match form.focused {
            CompanyField::Gender => form.cycle_gender(false),
            CompanyField::FleetSize => form.bump_fleet(1),
            _ => {}
        },
        KeyCode::Down => match form.focused {
            CompanyField::Gender => form.cycle_gender(true),
            CompanyField::FleetSize => form.bump_fleet(-1),
            _ => {}
        },

        KeyCode::Char(' ') if form.focused == CompanyField::LogisticsToggle => {
            form.toggle_logistics();
        }

        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_start(),
        KeyCode::End => form.move_end(),

        KeyCode::Char(c) => form.insert_char(c),

        _ => {}
    }
}

/// Render the company registration form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let owner = app.form.draft.logistics_owner();

    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Admin name
        Constraint::Length(1), // Email
        Constraint::Length(1), // Gender
        Constraint::Length(1), // Referral code
        Constraint::Length(1), // Referral hint
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Logistics toggle
    ];
    if owner {
        constraints.push(Constraint::Length(1)); // Fleet size
        constraints.push(Constraint::Length(1)); // Plates label
        constraints.push(Constraint::Min(0)); // Plate inputs
    } else {
        constraints.push(Constraint::Min(0)); // Remaining
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Registration",
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Please fill in the details to create your account.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(subtitle, chunks[1]);

    let focused = app.form.focused;
    let cursor = app.form.cursor;

    render_text_field(
        frame,
        chunks[3],
        "Admin Name",
        app.form.draft.first_name(),
        focused == CompanyField::FirstName,
        cursor,
        "First Name",
    );

    render_text_field(
        frame,
        chunks[4],
        "Email",
        app.form.draft.email(),
        focused == CompanyField::Email,
        cursor,
        "driver@gmail.com",
    );

    render_gender_field(frame, chunks[5], app, focused == CompanyField::Gender);

    render_text_field(
        frame,
        chunks[6],
        "Referral Code",
        app.form.draft.referral_code(),
        focused == CompanyField::ReferralCode,
        cursor,
        "5789",
    );

    let referral_hint = Paragraph::new(Line::from(Span::styled(
        "If someone referred you, enter their code here.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(referral_hint, chunks[7]);

    render_toggle_field(
        frame,
        chunks[9],
        app,
        focused == CompanyField::LogisticsToggle,
    );

    if owner {
        let fleet_focused = focused == CompanyField::FleetSize;
        let fleet_value = if fleet_focused {
            app.form.fleet_input.clone()
        } else {
            app.form.draft.fleet_size().to_string()
        };
        render_text_field(
            frame,
            chunks[10],
            "Number of Bikes",
            &fleet_value,
            fleet_focused,
            char_len(&fleet_value),
            "1",
        );

        let plates_label = Paragraph::new(Line::from(Span::styled(
            "License Plates",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(plates_label, chunks[11]);

        render_plate_list(frame, app, chunks[12]);
    }
}

/// Render the windowed plate inputs, keeping the focused plate in view
fn render_plate_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = area.height as usize;
    if visible == 0 {
        return;
    }

    if let CompanyField::Plate(index) = app.form.focused {
        if index < app.form.plate_scroll {
            app.form.plate_scroll = index;
        } else if index >= app.form.plate_scroll + visible {
            app.form.plate_scroll = index + 1 - visible;
        }
    }

    let focused = app.form.focused;
    let cursor = app.form.cursor;
    let scroll = app.form.plate_scroll;
    let plates = app.form.draft.license_plates();

    for (row, index) in (scroll..plates.len()).take(visible).enumerate() {
        let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        let is_focused = focused == CompanyField::Plate(index);
        render_text_field(
            frame,
            line_area,
            &format!("License Plate {}", index + 1),
            &plates[index],
            is_focused,
            if is_focused { cursor } else { 0 },
            "",
        );
    }
}

/// Render the gender select line
fn render_gender_field(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let label_style = label_style(focused);
    let mut spans = vec![Span::styled("Gender: ", label_style)];

    match app.form.draft.gender() {
        Some(gender) => spans.push(Span::styled(
            gender.to_string(),
            Style::default().fg(Color::White),
        )),
        None => spans.push(Span::styled(
            "Select your gender",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if focused {
        spans.push(Span::styled(
            "  (↑/↓ to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the logistics-owner checkbox line
fn render_toggle_field(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let mark = if app.form.draft.logistics_owner() {
        "[x]"
    } else {
        "[ ]"
    };

    let mut spans = vec![
        Span::styled(mark, label_style(focused)),
        Span::styled(
            " I own a logistics company",
            Style::default().fg(Color::White),
        ),
    ];
    if focused {
        spans.push(Span::styled(
            "  (Space to toggle)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a labelled text field with a block cursor when focused
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    cursor: usize,
    placeholder: &str,
) {
    let value_style = Style::default().fg(Color::White);
    let mut spans = vec![Span::styled(format!("{}: ", label), label_style(focused))];

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        let chars: Vec<char> = value.chars().collect();
        let cursor = cursor.min(chars.len());

        let before: String = chars[..cursor].iter().collect();
        let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars
            .get(cursor + 1..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_plate_fields() {
        let mut form = CompanyFormState::new();
        let mut seen = vec![form.focused];
        for _ in 0..6 {
            form.next_field();
            seen.push(form.focused);
        }

        assert_eq!(
            seen,
            vec![
                CompanyField::FirstName,
                CompanyField::Email,
                CompanyField::Gender,
                CompanyField::ReferralCode,
                CompanyField::LogisticsToggle,
                CompanyField::FleetSize,
                CompanyField::Plate(0),
            ]
        );

        // Wraps back around to the first field
        form.next_field();
        assert_eq!(form.focused, CompanyField::FirstName);
    }

    #[test]
    fn test_focus_skips_fleet_fields_when_toggle_off() {
        let mut form = CompanyFormState::new();
        form.set_focus(CompanyField::LogisticsToggle);
        form.toggle_logistics();
        assert!(!form.draft.logistics_owner());

        form.next_field();
        assert_eq!(form.focused, CompanyField::FirstName);

        form.prev_field();
        assert_eq!(form.focused, CompanyField::LogisticsToggle);
    }

    #[test]
    fn test_typing_edits_the_focused_field() {
        let mut form = CompanyFormState::new();
        for c in "Ada".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.draft.first_name(), "Ada");

        form.set_focus(CompanyField::Email);
        for c in "ada@x.com".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.draft.email(), "ada@x.com");
    }

    #[test]
    fn test_cursor_editing_is_char_aware() {
        let mut form = CompanyFormState::new();
        for c in "Zoë".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.draft.first_name(), "Zo");

        form.move_start();
        form.insert_char('M');
        assert_eq!(form.draft.first_name(), "MZo");
    }

    #[test]
    fn test_fleet_digits_resize_the_plate_list() {
        let mut form = CompanyFormState::new();
        form.set_focus(CompanyField::FleetSize);

        form.backspace(); // clear the initial "1"
        form.insert_char('3');
        assert_eq!(form.draft.fleet_size(), 3);
        assert_eq!(form.draft.license_plates().len(), 3);

        // Non-digits are rejected at the input layer
        form.insert_char('x');
        assert_eq!(form.fleet_input, "3");
    }

    #[test]
    fn test_empty_fleet_buffer_clamps_to_one() {
        let mut form = CompanyFormState::new();
        form.set_focus(CompanyField::FleetSize);
        form.backspace();
        assert_eq!(form.fleet_input, "");
        assert_eq!(form.draft.fleet_size(), 1);

        // Blur resyncs the visible buffer with the clamped value
        form.set_focus(CompanyField::FirstName);
        assert_eq!(form.fleet_input, "1");
    }

    #[test]
    fn test_fleet_spinner_bumps_within_bounds() {
        let mut form = CompanyFormState::new();
        form.set_focus(CompanyField::FleetSize);
        form.bump_fleet(1);
        assert_eq!(form.draft.fleet_size(), 2);
        form.bump_fleet(-1);
        form.bump_fleet(-1);
        assert_eq!(form.draft.fleet_size(), 1);
    }

    #[test]
    fn test_gender_cycles_through_all_options() {
        let mut form = CompanyFormState::new();
        assert_eq!(form.draft.gender(), None);

        form.cycle_gender(true);
        assert_eq!(form.draft.gender(), Some(Gender::Male));
        form.cycle_gender(true);
        assert_eq!(form.draft.gender(), Some(Gender::Female));
        form.cycle_gender(true);
        assert_eq!(form.draft.gender(), Some(Gender::Others));
        form.cycle_gender(true);
        assert_eq!(form.draft.gender(), Some(Gender::Male));

        form.cycle_gender(false);
        assert_eq!(form.draft.gender(), Some(Gender::Others));
    }

    #[test]
    fn test_plate_edit_lands_on_the_focused_plate() {
        let mut form = CompanyFormState::new();
        form.set_focus(CompanyField::FleetSize);
        form.backspace();
        form.insert_char('3');

        form.set_focus(CompanyField::Plate(1));
        for c in "ABC-123".chars() {
            form.insert_char(c);
        }

        assert_eq!(form.draft.license_plates(), &["", "ABC-123", ""]);
    }

    #[test]
    fn test_insert_and_remove_at_boundaries() {
        assert_eq!(insert_at("", 0, 'a'), "a");
        assert_eq!(insert_at("bc", 0, 'a'), "abc");
        assert_eq!(insert_at("ab", 2, 'c'), "abc");
        assert_eq!(remove_at("abc", 0), "bc");
        assert_eq!(remove_at("abc", 2), "ab");
    }
}
