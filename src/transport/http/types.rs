use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::app::services::{
    CertificationService, CustomerPhoneService, CustomerService, DriverService, EmployeeService,
    MechanicService, RepairRecordService, ShipmentService, TripDriverService, TripService,
    VehicleService, VehicleTypeService,
};
use crate::storage::repositories::{
    CertificationRepository, CustomerPhoneRepository, CustomerRepository, DriverRepository,
    EmployeeRepository, MechanicRepository, RepairRecordRepository, ShipmentRepository,
    TripDriverRepository, TripRepository, VehicleRepository, VehicleTypeRepository,
};

/// Shared handler state: one service per resource, all over one pool.
#[derive(Clone)]
pub struct AppState {
    pub vehicle_types: VehicleTypeService,
    pub vehicles: VehicleService,
    pub employees: EmployeeService,
    pub certifications: CertificationService,
    pub mechanics: MechanicService,
    pub repair_records: RepairRecordService,
    pub customers: CustomerService,
    pub customer_phones: CustomerPhoneService,
    pub shipments: ShipmentService,
    pub trips: TripService,
    pub drivers: DriverService,
    pub trip_drivers: TripDriverService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        // The vehicle gateway is shared: the vehicle type service needs it
        // for its deletion guard and the repair record service for the
        // repair counter.
        let vehicles = VehicleRepository::new(pool.clone());
        Self {
            vehicle_types: VehicleTypeService::new(
                VehicleTypeRepository::new(pool.clone()),
                vehicles.clone(),
            ),
            repair_records: RepairRecordService::new(
                RepairRecordRepository::new(pool.clone()),
                vehicles.clone(),
            ),
            vehicles: VehicleService::new(vehicles),
            employees: EmployeeService::new(EmployeeRepository::new(pool.clone())),
            certifications: CertificationService::new(CertificationRepository::new(pool.clone())),
            mechanics: MechanicService::new(MechanicRepository::new(pool.clone())),
            customers: CustomerService::new(CustomerRepository::new(pool.clone())),
            customer_phones: CustomerPhoneService::new(CustomerPhoneRepository::new(pool.clone())),
            shipments: ShipmentService::new(ShipmentRepository::new(pool.clone())),
            trips: TripService::new(TripRepository::new(pool.clone())),
            drivers: DriverService::new(DriverRepository::new(pool.clone())),
            trip_drivers: TripDriverService::new(TripDriverRepository::new(pool)),
        }
    }
}

/// Body every failure maps to: `{"error": "<message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
