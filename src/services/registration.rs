//! Registration submission
//!
//! The submit gate for the company step: validate the draft, then stage the
//! snapshot under the fixed key. Validation failure writes nothing, so from
//! the user's point of view submit either fully happens or not at all.

use crate::error::{TrippickerError, TrippickerResult};
use crate::models::{DriverSnapshot, RegistrationDraft, STAGE_KEY};
use crate::storage::StageStore;

/// Service for staging and reading back registrations
pub struct RegistrationService<'a> {
    store: &'a mut dyn StageStore,
}

impl<'a> RegistrationService<'a> {
    /// Create a new registration service
    pub fn new(store: &'a mut dyn StageStore) -> Self {
        Self { store }
    }

    /// Validate the draft and stage its snapshot under `"driverData"`.
    ///
    /// Returns the validation error untouched when required fields are
    /// missing; the store is only written after validation passes.
    pub fn submit(&mut self, draft: &RegistrationDraft) -> TrippickerResult<()> {
        draft.validate()?;

        let value = serde_json::to_value(draft.snapshot())
            .map_err(|e| TrippickerError::Json(e.to_string()))?;
        self.store.set(STAGE_KEY, value)
    }

    /// Read back the staged registration, if one exists
    pub fn staged(&self) -> TrippickerResult<Option<DriverSnapshot>> {
        match self.store.get(STAGE_KEY)? {
            Some(value) => {
                let snapshot = serde_json::from_value(value)
                    .map_err(|e| TrippickerError::Json(e.to_string()))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStageStore;
    use serde_json::json;

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_first_name("Ada");
        draft.set_email("ada@x.com");
        draft
    }

    #[test]
    fn test_submit_blocked_on_empty_first_name() {
        let mut store = MemoryStageStore::new();
        let mut draft = RegistrationDraft::new();
        draft.set_email("ada@x.com");

        let err = RegistrationService::new(&mut store)
            .submit(&draft)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_blocked_on_empty_email() {
        let mut store = MemoryStageStore::new();
        let mut draft = RegistrationDraft::new();
        draft.set_first_name("Ada");

        assert!(RegistrationService::new(&mut store).submit(&draft).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_writes_exact_wire_shape() {
        let mut store = MemoryStageStore::new();
        RegistrationService::new(&mut store)
            .submit(&valid_draft())
            .unwrap();

        assert_eq!(
            store.get(STAGE_KEY).unwrap(),
            Some(json!({
                "firstName": "Ada",
                "email": "ada@x.com",
                "numberBikes": 1,
                "licensePlates": [""]
            }))
        );
    }

    #[test]
    fn test_resubmit_overwrites_prior_snapshot() {
        let mut store = MemoryStageStore::new();

        let first = valid_draft();
        RegistrationService::new(&mut store).submit(&first).unwrap();

        let mut second = valid_draft();
        second.set_fleet_size(2);
        RegistrationService::new(&mut store)
            .submit(&second)
            .unwrap();

        let staged = RegistrationService::new(&mut store).staged().unwrap();
        assert_eq!(staged.unwrap().number_bikes, 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_staged_is_none_before_any_submit() {
        let mut store = MemoryStageStore::new();
        let service = RegistrationService::new(&mut store);
        assert_eq!(service.staged().unwrap(), None);
    }
}
