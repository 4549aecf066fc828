//! The fleet: vehicle categories and the vehicles themselves.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{ensure_valid, require_string};
use crate::domain::error::Result;

/// Category a vehicle belongs to (in-city trucks, cargo planes, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleType {
    #[serde(rename = "VehicleTypeID")]
    pub vehicle_type_id: i64,
    pub vehicle_type_name: String,
}

/// Reference to a `VehicleType` row as it travels on the wire.
///
/// Extra keys inside the reference object are ignored on input; only the
/// identifier is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleTypeRef {
    #[serde(rename = "VehicleTypeID")]
    pub vehicle_type_id: i64,
}

impl VehicleTypeRef {
    pub fn new(vehicle_type_id: i64) -> Self {
        Self { vehicle_type_id }
    }
}

/// Untrusted partial body for vehicle type create/update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleTypeInput {
    #[serde(rename = "VehicleTypeID")]
    pub vehicle_type_id: Option<i64>,
    pub vehicle_type_name: Option<String>,
}

impl From<VehicleTypeInput> for VehicleType {
    fn from(input: VehicleTypeInput) -> Self {
        VehicleType {
            vehicle_type_id: input.vehicle_type_id.unwrap_or_default(),
            vehicle_type_name: input.vehicle_type_name.unwrap_or_default(),
        }
    }
}

impl VehicleType {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_string(&mut violations, "VehicleTypeName", &self.vehicle_type_name);
        ensure_valid(violations)
    }
}

/// A vehicle in the fleet. `number_of_repairs` is maintained incrementally by
/// the repair record service, not recomputed from the repair table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleTypeRef>,
    pub brand: String,
    pub load: i64,
    pub capacity: i64,
    pub year: i64,
    pub number_of_repairs: i64,
}

/// Reference to a `Vehicle` row as it travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleRef {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: i64,
}

impl VehicleRef {
    pub fn new(vehicle_id: i64) -> Self {
        Self { vehicle_id }
    }
}

/// Untrusted partial body for vehicle create/update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleInput {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: Option<i64>,
    pub vehicle_type: Option<VehicleTypeRef>,
    pub brand: Option<String>,
    pub load: Option<i64>,
    pub capacity: Option<i64>,
    pub year: Option<i64>,
    pub number_of_repairs: Option<i64>,
}

impl From<VehicleInput> for Vehicle {
    fn from(input: VehicleInput) -> Self {
        Vehicle {
            vehicle_id: input.vehicle_id.unwrap_or_default(),
            vehicle_type: input.vehicle_type,
            brand: input.brand.unwrap_or_default(),
            load: input.load.unwrap_or_default(),
            capacity: input.capacity.unwrap_or_default(),
            year: input.year.unwrap_or_default(),
            number_of_repairs: input.number_of_repairs.unwrap_or_default(),
        }
    }
}

impl Vehicle {
    /// The numeric fields are typed, so only the brand can actually violate
    /// required-ness once the record is assembled.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_string(&mut violations, "Brand", &self.brand);
        ensure_valid(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_vehicle_type_with_defaults() {
        let assembled = VehicleType::from(VehicleTypeInput::default());
        assert_eq!(assembled.vehicle_type_id, 0);
        assert_eq!(assembled.vehicle_type_name, "");
    }

    #[test]
    fn empty_name_fails_validation() {
        let assembled = VehicleType::from(VehicleTypeInput::default());
        let err = assembled.validate().unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(
            err.to_string(),
            "Validation failed: VehicleTypeName should not be empty"
        );
    }

    #[test]
    fn vehicle_assembly_defaults_absent_numbers_to_zero() {
        let input: VehicleInput = serde_json::from_str(r#"{"Brand": "Vasquez Ltd"}"#).unwrap();
        let vehicle = Vehicle::from(input);
        assert_eq!(vehicle.load, 0);
        assert_eq!(vehicle.year, 0);
        assert_eq!(vehicle.number_of_repairs, 0);
        assert!(vehicle.vehicle_type.is_none());
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn reference_objects_ignore_extra_keys() {
        let input: VehicleInput = serde_json::from_str(
            r#"{"Brand": "Bell Inc", "VehicleType": {"VehicleTypeID": 3, "VehicleTypeName": "Car"}}"#,
        )
        .unwrap();
        assert_eq!(input.vehicle_type, Some(VehicleTypeRef::new(3)));
    }

    #[test]
    fn absent_references_are_omitted_from_json() {
        let vehicle = Vehicle::from(VehicleInput {
            brand: Some("Scott Ltd".to_string()),
            ..VehicleInput::default()
        });
        let json = serde_json::to_value(&vehicle).unwrap();
        assert!(json.get("VehicleType").is_none());
        assert_eq!(json["Brand"], "Scott Ltd");
        assert_eq!(json["NumberOfRepairs"], 0);
    }
}
