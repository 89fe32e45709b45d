//! The persisted registration snapshot
//!
//! The only durable artifact the wizard produces. The wire shape is fixed:
//! the documents step (and eventually the backend) reads exactly
//! `{firstName, email, numberBikes, licensePlates}` from under the
//! `"driverData"` key.

use serde::{Deserialize, Serialize};

/// The fixed key the snapshot is staged under
pub const STAGE_KEY: &str = "driverData";

/// The subset of the registration draft written on successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSnapshot {
    /// Admin name
    pub first_name: String,
    /// Contact email
    pub email: String,
    /// Fleet size ("numberBikes" on the wire)
    pub number_bikes: usize,
    /// One plate per bike, in fleet order
    pub license_plates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let snapshot = DriverSnapshot {
            first_name: "Ada".into(),
            email: "ada@x.com".into(),
            number_bikes: 1,
            license_plates: vec![String::new()],
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "firstName": "Ada",
                "email": "ada@x.com",
                "numberBikes": 1,
                "licensePlates": [""]
            })
        );
    }

    #[test]
    fn test_deserialize_round_trip() {
        let raw = r#"{"firstName":"Tumi","email":"tumi@trippicker.com","numberBikes":2,"licensePlates":["KDA 001","KDA 002"]}"#;
        let snapshot: DriverSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.first_name, "Tumi");
        assert_eq!(snapshot.number_bikes, 2);
        assert_eq!(snapshot.license_plates.len(), 2);
    }
}
