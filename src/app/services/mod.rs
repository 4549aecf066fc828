//! Domain services, one per entity.
//!
//! Each service assembles a full record from the partial input, validates
//! required-ness, requires the identifier on update (full-replace semantics:
//! fields omitted from the input are wiped to their defaults), and delegates
//! storage to its repository. Gateway errors pass through unchanged.

pub mod customers;
pub mod freight;
pub mod personnel;
pub mod repairs;
pub mod vehicles;

pub use customers::{CustomerPhoneService, CustomerService};
pub use freight::{DriverService, ShipmentService, TripDriverService, TripService};
pub use personnel::{CertificationService, EmployeeService, MechanicService};
pub use repairs::RepairRecordService;
pub use vehicles::{VehicleService, VehicleTypeService};
