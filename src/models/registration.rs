//! The in-memory registration draft
//!
//! Owns all company-registration form state and the invariant that the
//! license-plate list always has exactly one entry per bike. The draft is
//! created with defaults when the company page is entered and discarded
//! when it is left; only `snapshot()` survives a successful submit.

use super::gender::Gender;
use super::snapshot::DriverSnapshot;
use crate::error::{TrippickerError, TrippickerResult};

/// Adjust a plate list to the given length.
///
/// Growth appends empty entries; shrink drops trailing entries, never
/// leading ones. Calling this twice with the same length is a no-op.
pub fn reconcile_plates(mut plates: Vec<String>, target_len: usize) -> Vec<String> {
    if plates.len() < target_len {
        plates.resize_with(target_len, String::new);
    } else {
        plates.truncate(target_len);
    }
    plates
}

/// Mutable form state for the company registration step
///
/// Invariant: `license_plates.len() == fleet_size` after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    first_name: String,
    email: String,
    logistics_owner: bool,
    gender: Option<Gender>,
    referral_code: String,
    fleet_size: usize,
    license_plates: Vec<String>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            email: String::new(),
            logistics_owner: true,
            gender: None,
            referral_code: String::new(),
            fleet_size: 1,
            license_plates: vec![String::new()],
        }
    }
}

impl RegistrationDraft {
    /// Create a draft with the form's default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn logistics_owner(&self) -> bool {
        self.logistics_owner
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn referral_code(&self) -> &str {
        &self.referral_code
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    pub fn license_plates(&self) -> &[String] {
        &self.license_plates
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    pub fn set_referral_code(&mut self, value: impl Into<String>) {
        self.referral_code = value.into();
    }

    /// Toggle whether fleet fields are collected.
    ///
    /// Turning the flag off hides the fields but never clears their data.
    pub fn set_logistics_owner(&mut self, flag: bool) {
        self.logistics_owner = flag;
    }

    /// Set the fleet size and reconcile the plate list to match.
    ///
    /// Non-positive sizes are clamped to 1.
    pub fn set_fleet_size(&mut self, size: usize) {
        let size = size.max(1);
        self.fleet_size = size;
        self.license_plates = reconcile_plates(std::mem::take(&mut self.license_plates), size);
    }

    /// Replace the plate at `index`.
    ///
    /// An out-of-range index is a programming error in the caller; it is
    /// ignored here rather than allowed to break the length invariant.
    pub fn set_license_plate(&mut self, index: usize, value: impl Into<String>) {
        if let Some(plate) = self.license_plates.get_mut(index) {
            *plate = value.into();
        }
    }

    /// The submit-time validation gate: admin name and email are required.
    ///
    /// Emptiness means the empty string; no trimming or format checks are
    /// applied to either field.
    pub fn validate(&self) -> TrippickerResult<()> {
        if self.first_name.is_empty() || self.email.is_empty() {
            return Err(TrippickerError::missing_required_fields());
        }
        Ok(())
    }

    /// Build the persisted subset of the draft.
    ///
    /// `logistics_owner`, `gender`, and `referral_code` are collected but
    /// deliberately not part of the snapshot.
    pub fn snapshot(&self) -> DriverSnapshot {
        DriverSnapshot {
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            number_bikes: self.fleet_size,
            license_plates: self.license_plates.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = RegistrationDraft::new();
        assert_eq!(draft.first_name(), "");
        assert_eq!(draft.email(), "");
        assert!(draft.logistics_owner());
        assert_eq!(draft.gender(), None);
        assert_eq!(draft.fleet_size(), 1);
        assert_eq!(draft.license_plates(), &[String::new()]);
    }

    #[test]
    fn test_reconcile_grows_with_empty_entries() {
        let plates = reconcile_plates(vec!["AAA".into()], 3);
        assert_eq!(plates, vec!["AAA".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn test_reconcile_shrinks_from_the_tail() {
        let plates = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            reconcile_plates(plates, 2),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let once = reconcile_plates(vec!["x".into()], 4);
        let twice = reconcile_plates(once.clone(), 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fleet_size_keeps_plate_length_in_sync() {
        let mut draft = RegistrationDraft::new();
        for size in [3, 7, 2, 5, 1] {
            draft.set_fleet_size(size);
            assert_eq!(draft.license_plates().len(), draft.fleet_size());
            assert_eq!(draft.fleet_size(), size);
        }
    }

    #[test]
    fn test_growing_preserves_existing_plates() {
        let mut draft = RegistrationDraft::new();
        draft.set_fleet_size(2);
        draft.set_license_plate(0, "KDA 001");
        draft.set_license_plate(1, "KDA 002");

        draft.set_fleet_size(4);
        assert_eq!(draft.license_plates()[0], "KDA 001");
        assert_eq!(draft.license_plates()[1], "KDA 002");
        assert_eq!(draft.license_plates()[2], "");
        assert_eq!(draft.license_plates()[3], "");
    }

    #[test]
    fn test_shrinking_drops_trailing_plates_only() {
        let mut draft = RegistrationDraft::new();
        draft.set_fleet_size(3);
        draft.set_license_plate(0, "first");
        draft.set_license_plate(1, "middle");
        draft.set_license_plate(2, "last");

        draft.set_fleet_size(2);
        assert_eq!(
            draft.license_plates(),
            &["first".to_string(), "middle".to_string()]
        );
    }

    #[test]
    fn test_truncation_is_not_index_stable() {
        // The edited middle entry is dropped when shrinking back to one,
        // because truncation removes trailing entries regardless of edits.
        let mut draft = RegistrationDraft::new();
        draft.set_fleet_size(3);
        assert_eq!(draft.license_plates(), &["", "", ""]);

        draft.set_license_plate(1, "ABC-123");
        assert_eq!(draft.license_plates(), &["", "ABC-123", ""]);

        draft.set_fleet_size(1);
        assert_eq!(draft.license_plates(), &[String::new()]);
    }

    #[test]
    fn test_fleet_size_clamps_to_one() {
        let mut draft = RegistrationDraft::new();
        draft.set_fleet_size(0);
        assert_eq!(draft.fleet_size(), 1);
        assert_eq!(draft.license_plates().len(), 1);
    }

    #[test]
    fn test_out_of_range_plate_index_is_ignored() {
        let mut draft = RegistrationDraft::new();
        let before = draft.clone();
        draft.set_license_plate(5, "nope");
        assert_eq!(draft, before);
    }

    #[test]
    fn test_toggling_logistics_retains_fleet_data() {
        let mut draft = RegistrationDraft::new();
        draft.set_fleet_size(2);
        draft.set_license_plate(0, "KAA 123");

        draft.set_logistics_owner(false);
        draft.set_logistics_owner(true);

        assert_eq!(draft.fleet_size(), 2);
        assert_eq!(draft.license_plates()[0], "KAA 123");
    }

    #[test]
    fn test_validate_requires_first_name() {
        let mut draft = RegistrationDraft::new();
        draft.set_email("ada@x.com");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_requires_email() {
        let mut draft = RegistrationDraft::new();
        draft.set_first_name("Ada");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_passes_with_both_fields() {
        let mut draft = RegistrationDraft::new();
        draft.set_first_name("Ada");
        draft.set_email("ada@x.com");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_snapshot_contains_only_persisted_fields() {
        let mut draft = RegistrationDraft::new();
        draft.set_first_name("Ada");
        draft.set_email("ada@x.com");
        draft.set_gender(Gender::Female);
        draft.set_referral_code("5789");
        draft.set_fleet_size(2);
        draft.set_license_plate(0, "KDA 001");

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.first_name, "Ada");
        assert_eq!(snapshot.email, "ada@x.com");
        assert_eq!(snapshot.number_bikes, 2);
        assert_eq!(
            snapshot.license_plates,
            vec!["KDA 001".to_string(), String::new()]
        );
    }
}
