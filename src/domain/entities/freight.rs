//! Freight movement: shipments, the trips carrying them, and the drivers
//! assigned to those trips.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::customers::CustomerRef;
use crate::domain::entities::vehicles::VehicleRef;
use crate::domain::entities::{ensure_valid, require_reference, require_string};
use crate::domain::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    #[serde(rename = "ShipmentID")]
    pub shipment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    pub weight: i64,
    pub value: i64,
    pub origin_place: String,
    pub destination_place: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShipmentRef {
    #[serde(rename = "ShipmentID")]
    pub shipment_id: i64,
}

impl ShipmentRef {
    pub fn new(shipment_id: i64) -> Self {
        Self { shipment_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentInput {
    #[serde(rename = "ShipmentID")]
    pub shipment_id: Option<i64>,
    pub customer: Option<CustomerRef>,
    pub weight: Option<i64>,
    pub value: Option<i64>,
    pub origin_place: Option<String>,
    pub destination_place: Option<String>,
}

impl From<ShipmentInput> for Shipment {
    fn from(input: ShipmentInput) -> Self {
        Shipment {
            shipment_id: input.shipment_id.unwrap_or_default(),
            customer: input.customer,
            weight: input.weight.unwrap_or_default(),
            value: input.value.unwrap_or_default(),
            origin_place: input.origin_place.unwrap_or_default(),
            destination_place: input.destination_place.unwrap_or_default(),
        }
    }
}

impl Shipment {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Customer", &self.customer);
        require_string(&mut violations, "OriginPlace", &self.origin_place);
        require_string(&mut violations, "DestinationPlace", &self.destination_place);
        ensure_valid(violations)
    }
}

/// One vehicle moving one shipment between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Trip {
    #[serde(rename = "TripID")]
    pub trip_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentRef>,
    pub from_place: String,
    pub to_place: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripRef {
    #[serde(rename = "TripID")]
    pub trip_id: i64,
}

impl TripRef {
    pub fn new(trip_id: i64) -> Self {
        Self { trip_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripInput {
    #[serde(rename = "TripID")]
    pub trip_id: Option<i64>,
    pub vehicle: Option<VehicleRef>,
    pub shipment: Option<ShipmentRef>,
    pub from_place: Option<String>,
    pub to_place: Option<String>,
}

impl From<TripInput> for Trip {
    fn from(input: TripInput) -> Self {
        Trip {
            trip_id: input.trip_id.unwrap_or_default(),
            vehicle: input.vehicle,
            shipment: input.shipment,
            from_place: input.from_place.unwrap_or_default(),
            to_place: input.to_place.unwrap_or_default(),
        }
    }
}

impl Trip {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Vehicle", &self.vehicle);
        require_reference(&mut violations, "Shipment", &self.shipment);
        require_string(&mut violations, "FromPlace", &self.from_place);
        require_string(&mut violations, "ToPlace", &self.to_place);
        ensure_valid(violations)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Driver {
    #[serde(rename = "DriverID")]
    pub driver_id: i64,
    pub driver_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverRef {
    #[serde(rename = "DriverID")]
    pub driver_id: i64,
}

impl DriverRef {
    pub fn new(driver_id: i64) -> Self {
        Self { driver_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DriverInput {
    #[serde(rename = "DriverID")]
    pub driver_id: Option<i64>,
    pub driver_name: Option<String>,
}

impl From<DriverInput> for Driver {
    fn from(input: DriverInput) -> Self {
        Driver {
            driver_id: input.driver_id.unwrap_or_default(),
            driver_name: input.driver_name.unwrap_or_default(),
        }
    }
}

impl Driver {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_string(&mut violations, "DriverName", &self.driver_name);
        ensure_valid(violations)
    }
}

/// Assignment of a driver to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripDriver {
    #[serde(rename = "TripDriverID")]
    pub trip_driver_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip: Option<TripRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverRef>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripDriverInput {
    #[serde(rename = "TripDriverID")]
    pub trip_driver_id: Option<i64>,
    pub trip: Option<TripRef>,
    pub driver: Option<DriverRef>,
}

impl From<TripDriverInput> for TripDriver {
    fn from(input: TripDriverInput) -> Self {
        TripDriver {
            trip_driver_id: input.trip_driver_id.unwrap_or_default(),
            trip: input.trip,
            driver: input.driver,
        }
    }
}

impl TripDriver {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Trip", &self.trip);
        require_reference(&mut violations, "Driver", &self.driver);
        ensure_valid(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipment_collects_every_violation() {
        let bare = Shipment::from(ShipmentInput::default());
        let err = bare.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Customer should not be empty; \
             OriginPlace should not be empty; DestinationPlace should not be empty"
        );
    }

    #[test]
    fn trip_requires_vehicle_shipment_and_places() {
        let input: TripInput = serde_json::from_str(
            r#"{"Vehicle": {"VehicleID": 1}, "Shipment": {"ShipmentID": 2},
                "FromPlace": "Waterloo", "ToPlace": "Kitchener"}"#,
        )
        .unwrap();
        assert!(Trip::from(input).validate().is_ok());

        let missing = Trip::from(TripInput {
            from_place: Some("Waterloo".to_string()),
            to_place: Some("Kitchener".to_string()),
            ..TripInput::default()
        });
        let err = missing.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Vehicle should not be empty; Shipment should not be empty"
        );
    }

    #[test]
    fn trip_driver_requires_both_sides_of_the_join() {
        let only_driver = TripDriver::from(TripDriverInput {
            driver: Some(DriverRef::new(7)),
            ..TripDriverInput::default()
        });
        let err = only_driver.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Trip should not be empty");
    }
}
