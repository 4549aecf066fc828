//! Repair records tying a vehicle to the mechanic who worked on it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::personnel::MechanicRef;
use crate::domain::entities::vehicles::VehicleRef;
use crate::domain::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RepairRecord {
    #[serde(rename = "RepairRecordID")]
    pub repair_record_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanic: Option<MechanicRef>,
    pub estimated_time: i64,
    pub actual_cost_time: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RepairRecordInput {
    #[serde(rename = "RepairRecordID")]
    pub repair_record_id: Option<i64>,
    pub vehicle: Option<VehicleRef>,
    pub mechanic: Option<MechanicRef>,
    pub estimated_time: Option<i64>,
    pub actual_cost_time: Option<i64>,
}

impl From<RepairRecordInput> for RepairRecord {
    fn from(input: RepairRecordInput) -> Self {
        RepairRecord {
            repair_record_id: input.repair_record_id.unwrap_or_default(),
            vehicle: input.vehicle,
            mechanic: input.mechanic,
            estimated_time: input.estimated_time.unwrap_or_default(),
            actual_cost_time: input.actual_cost_time.unwrap_or_default(),
        }
    }
}

impl RepairRecord {
    /// The time fields are typed numbers and the vehicle/mechanic references
    /// are deliberately not enforced here: the counter maintenance in the
    /// service layer is conditional on the vehicle reference being optional.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_references_is_accepted() {
        let record = RepairRecord::from(RepairRecordInput {
            estimated_time: Some(150),
            actual_cost_time: Some(150),
            ..RepairRecordInput::default()
        });
        assert!(record.validate().is_ok());
        assert!(record.vehicle.is_none());
    }

    #[test]
    fn assembles_from_nested_reference_objects() {
        let input: RepairRecordInput = serde_json::from_str(
            r#"{"RepairRecordID": 4, "Vehicle": {"VehicleID": 1}, "Mechanic": {"MechanicID": 1},
                "EstimatedTime": 200, "ActualCostTime": 200}"#,
        )
        .unwrap();
        let record = RepairRecord::from(input);
        assert_eq!(record.repair_record_id, 4);
        assert_eq!(record.vehicle, Some(VehicleRef::new(1)));
        assert_eq!(record.mechanic, Some(MechanicRef::new(1)));
    }
}
