use serde::Deserialize;

use crate::error::CodegenError;

/// Localized text; only the English variant is read.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub en: Option<String>,
}

/// Vehicle record from the `vehicle` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub name: Option<LocalizedName>,
}

impl Vehicle {
    /// English display name, if the record carries one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref()?.en.as_deref()
    }
}

/// Loadout (class) record from the `loadout` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Loadout {
    pub loadout_id: String,
    pub code_name: String,
}

#[derive(Debug, Deserialize)]
struct VehicleResponse {
    vehicle_list: Vec<Vehicle>,
}

#[derive(Debug, Deserialize)]
struct LoadoutResponse {
    loadout_list: Vec<Loadout>,
}

/// Parse the vehicle catalog from a `vehicle` response body.
pub fn parse_vehicle_list(body: &str) -> Result<Vec<Vehicle>, CodegenError> {
    serde_json::from_str::<VehicleResponse>(body)
        .map(|resp| resp.vehicle_list)
        .map_err(|source| CodegenError::MalformedResponse {
            collection: "vehicle",
            source,
        })
}

/// Parse the loadout catalog from a `loadout` response body.
pub fn parse_loadout_list(body: &str) -> Result<Vec<Loadout>, CodegenError> {
    serde_json::from_str::<LoadoutResponse>(body)
        .map(|resp| resp.loadout_list)
        .map_err(|source| CodegenError::MalformedResponse {
            collection: "loadout",
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_names_are_optional_at_both_levels() {
        let body = r#"{
            "vehicle_list": [
                { "vehicle_id": "1", "name": { "en": "Flash", "de": "Flash" }, "cost": 50 },
                { "vehicle_id": "2", "name": { "de": "Sunderer" } },
                { "vehicle_id": "3" },
                { "vehicle_id": "4", "name": null }
            ],
            "returned": 4
        }"#;

        let vehicles = parse_vehicle_list(body).unwrap();
        let names: Vec<_> = vehicles.iter().map(Vehicle::display_name).collect();

        assert_eq!(names, vec![Some("Flash"), None, None, None]);
    }

    #[test]
    fn missing_vehicle_list_is_malformed() {
        let err = parse_vehicle_list(r#"{ "error": "service unavailable" }"#).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::MalformedResponse {
                collection: "vehicle",
                ..
            }
        ));
    }

    #[test]
    fn missing_loadout_list_is_malformed() {
        let err = parse_loadout_list(r#"{ "vehicle_list": [] }"#).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::MalformedResponse {
                collection: "loadout",
                ..
            }
        ));
    }

    #[test]
    fn loadout_requires_code_name() {
        let err = parse_loadout_list(r#"{ "loadout_list": [ { "loadout_id": "1" } ] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_loadout_list("<html>Bad Gateway</html>"),
            Err(CodegenError::MalformedResponse { .. })
        ));
    }
}
