//! Event handler for the wizard
//!
//! Routes keyboard events to the active route's handler. While the
//! blocking alert is open, only acknowledgement keys are honored.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Route};
use super::event::Event;
use super::views::company;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = event {
        handle_key_event(app, key);
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The alert blocks everything except acknowledgement
    if app.has_alert() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.close_alert();
        }
        return;
    }

    match app.route {
        Route::DriverLanding => handle_landing_key(app, key),
        Route::Company => company::handle_key(app, key),
        Route::Documents => handle_documents_key(app, key),
    }
}

/// Handle keys on the landing route
fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.navigate(Route::Company),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

/// Handle keys on the documents route
fn handle_documents_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.quit();
    }
}
