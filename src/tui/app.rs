//! Application state for the wizard
//!
//! The App struct holds the active route, the company form state, the
//! blocking alert, and the injected stage store.

use crate::error::TrippickerError;
use crate::services::RegistrationService;
use crate::storage::StageStore;

use super::views::company::CompanyFormState;

/// The wizard's routes, in linear order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Driver landing page (the step before registration)
    #[default]
    DriverLanding,
    /// The company registration form
    Company,
    /// Documents step (downstream, placeholder here)
    Documents,
}

impl Route {
    /// Short label for the nav bar trail
    pub fn title(self) -> &'static str {
        match self {
            Route::DriverLanding => "Driver",
            Route::Company => "Company",
            Route::Documents => "Documents",
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The staged-data store (localStorage analogue)
    pub store: &'a mut dyn StageStore,

    /// Currently active route
    pub route: Route,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Company form state; recreated whenever the route is entered
    pub form: CompanyFormState,

    /// Blocking alert message; swallows all input until acknowledged
    pub alert: Option<String>,

    /// Transient status message shown in the footer
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance starting on the landing route
    pub fn new(store: &'a mut dyn StageStore) -> Self {
        Self {
            store,
            route: Route::default(),
            should_quit: false,
            form: CompanyFormState::new(),
            alert: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a route.
    ///
    /// Entering the company route mounts a fresh form: a prior visit's
    /// input is never restored.
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Company {
            self.form = CompanyFormState::new();
        }
        self.route = route;
    }

    /// Open the blocking alert
    pub fn open_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Acknowledge and close the alert
    pub fn close_alert(&mut self) {
        self.alert = None;
    }

    /// Check if the blocking alert is open
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Submit the company form.
    ///
    /// Validation failure opens the blocking alert and changes nothing
    /// else; success stages the snapshot and advances to the documents
    /// route in one step.
    pub fn submit_company(&mut self) {
        let result = RegistrationService::new(&mut *self.store).submit(&self.form.draft);
        match result {
            Ok(()) => {
                self.set_status("Registration saved");
                self.navigate(Route::Documents);
            }
            Err(TrippickerError::Validation(message)) => {
                self.open_alert(message);
            }
            Err(err) => {
                self.open_alert(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUIRED_FIELDS_MESSAGE;
    use crate::models::STAGE_KEY;
    use crate::storage::MemoryStageStore;
    use serde_json::json;

    #[test]
    fn test_starts_on_landing() {
        let mut store = MemoryStageStore::new();
        let app = App::new(&mut store);
        assert_eq!(app.route, Route::DriverLanding);
        assert!(!app.has_alert());
    }

    #[test]
    fn test_submit_with_missing_fields_blocks_navigation_and_write() {
        let mut store = MemoryStageStore::new();
        let mut app = App::new(&mut store);
        app.navigate(Route::Company);

        app.submit_company();

        assert_eq!(app.route, Route::Company);
        assert_eq!(app.alert.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));
        assert!(app.store.get(STAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_submit_stages_snapshot_and_advances() {
        let mut store = MemoryStageStore::new();
        let mut app = App::new(&mut store);
        app.navigate(Route::Company);
        app.form.draft.set_first_name("Ada");
        app.form.draft.set_email("ada@x.com");

        app.submit_company();

        assert_eq!(app.route, Route::Documents);
        assert!(!app.has_alert());
        assert_eq!(
            app.store.get(STAGE_KEY).unwrap(),
            Some(json!({
                "firstName": "Ada",
                "email": "ada@x.com",
                "numberBikes": 1,
                "licensePlates": [""]
            }))
        );
    }

    #[test]
    fn test_reentering_company_mounts_a_fresh_form() {
        let mut store = MemoryStageStore::new();
        let mut app = App::new(&mut store);
        app.navigate(Route::Company);
        app.form.draft.set_first_name("Ada");

        // Prev discards the draft; coming back starts over
        app.navigate(Route::DriverLanding);
        app.navigate(Route::Company);

        assert_eq!(app.form.draft.first_name(), "");
    }
}
