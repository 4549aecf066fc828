//! Staff records: employees plus the join entities tying them to vehicle
//! types (certifications) and to repair duty (mechanics).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::vehicles::VehicleTypeRef;
use crate::domain::entities::{ensure_valid, require_reference, require_string};
use crate::domain::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    pub first_name: String,
    pub surname: String,
    pub seniority: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeRef {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
}

impl EmployeeRef {
    pub fn new(employee_id: i64) -> Self {
        Self { employee_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeInput {
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<i64>,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub seniority: Option<i64>,
}

impl From<EmployeeInput> for Employee {
    fn from(input: EmployeeInput) -> Self {
        Employee {
            employee_id: input.employee_id.unwrap_or_default(),
            first_name: input.first_name.unwrap_or_default(),
            surname: input.surname.unwrap_or_default(),
            seniority: input.seniority.unwrap_or_default(),
        }
    }
}

impl Employee {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_string(&mut violations, "FirstName", &self.first_name);
        require_string(&mut violations, "Surname", &self.surname);
        ensure_valid(violations)
    }
}

/// An employee's certification to operate a vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Certification {
    #[serde(rename = "CertificationID")]
    pub certification_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleTypeRef>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CertificationInput {
    #[serde(rename = "CertificationID")]
    pub certification_id: Option<i64>,
    pub employee: Option<EmployeeRef>,
    pub vehicle_type: Option<VehicleTypeRef>,
}

impl From<CertificationInput> for Certification {
    fn from(input: CertificationInput) -> Self {
        Certification {
            certification_id: input.certification_id.unwrap_or_default(),
            employee: input.employee,
            vehicle_type: input.vehicle_type,
        }
    }
}

impl Certification {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Employee", &self.employee);
        require_reference(&mut violations, "VehicleType", &self.vehicle_type);
        ensure_valid(violations)
    }
}

/// An employee assigned to repair duty for a vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Mechanic {
    #[serde(rename = "MechanicID")]
    pub mechanic_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleTypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MechanicRef {
    #[serde(rename = "MechanicID")]
    pub mechanic_id: i64,
}

impl MechanicRef {
    pub fn new(mechanic_id: i64) -> Self {
        Self { mechanic_id }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MechanicInput {
    #[serde(rename = "MechanicID")]
    pub mechanic_id: Option<i64>,
    pub employee: Option<EmployeeRef>,
    pub vehicle_type: Option<VehicleTypeRef>,
}

impl From<MechanicInput> for Mechanic {
    fn from(input: MechanicInput) -> Self {
        Mechanic {
            mechanic_id: input.mechanic_id.unwrap_or_default(),
            employee: input.employee,
            vehicle_type: input.vehicle_type,
        }
    }
}

impl Mechanic {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        require_reference(&mut violations, "Employee", &self.employee);
        require_reference(&mut violations, "VehicleType", &self.vehicle_type);
        ensure_valid(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_requires_both_name_fields() {
        let employee = Employee::from(EmployeeInput {
            seniority: Some(4),
            ..EmployeeInput::default()
        });
        let err = employee.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: FirstName should not be empty; Surname should not be empty"
        );
    }

    #[test]
    fn certification_requires_both_references() {
        let bare = Certification::from(CertificationInput::default());
        let err = bare.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Employee should not be empty; VehicleType should not be empty"
        );

        let complete: CertificationInput = serde_json::from_str(
            r#"{"Employee": {"EmployeeID": 2}, "VehicleType": {"VehicleTypeID": 1}}"#,
        )
        .unwrap();
        assert!(Certification::from(complete).validate().is_ok());
    }

    #[test]
    fn mechanic_requires_both_references() {
        let missing_type = Mechanic::from(MechanicInput {
            employee: Some(EmployeeRef::new(1)),
            ..MechanicInput::default()
        });
        let err = missing_type.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: VehicleType should not be empty");
    }
}
