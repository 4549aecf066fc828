//! Passive domain records and the partial inputs they are assembled from.
//!
//! Each entity follows the same pattern:
//! - the full record as it is persisted and served (`Vehicle`, `Trip`, ...),
//! - a `*Ref` carrying just the referenced identifier for many-to-one links,
//! - a `*Input` mirroring the record with every field optional, from which a
//!   full record is assembled (absent strings become empty, absent numbers
//!   zero, absent references stay unset),
//! - a `validate` method enforcing required-ness before persistence.
//!
//! Wire names are case-preserving PascalCase (`VehicleTypeID`, `FirstName`).

use crate::domain::error::{PersistenceError, Result};

pub mod customers;
pub mod freight;
pub mod personnel;
pub mod repairs;
pub mod vehicles;

pub use customers::{Customer, CustomerInput, CustomerPhone, CustomerPhoneInput, CustomerRef};
pub use freight::{
    Driver, DriverInput, DriverRef, Shipment, ShipmentInput, ShipmentRef, Trip, TripDriver,
    TripDriverInput, TripInput, TripRef,
};
pub use personnel::{
    Certification, CertificationInput, Employee, EmployeeInput, EmployeeRef, Mechanic,
    MechanicInput, MechanicRef,
};
pub use repairs::{RepairRecord, RepairRecordInput};
pub use vehicles::{Vehicle, VehicleInput, VehicleRef, VehicleType, VehicleTypeInput, VehicleTypeRef};

pub(crate) fn require_string(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.is_empty() {
        violations.push(format!("{field} should not be empty"));
    }
}

pub(crate) fn require_reference<T>(violations: &mut Vec<String>, field: &str, reference: &Option<T>) {
    if reference.is_none() {
        violations.push(format!("{field} should not be empty"));
    }
}

pub(crate) fn ensure_valid(violations: Vec<String>) -> Result<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(PersistenceError::validation(violations))
    }
}
