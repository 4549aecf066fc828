use crate::domain::entities::{
    Certification, CertificationInput, Customer, CustomerInput, CustomerPhone, CustomerPhoneInput,
    CustomerRef, Driver, DriverInput, DriverRef, Employee, EmployeeInput, EmployeeRef, Mechanic,
    MechanicInput, MechanicRef, RepairRecord, RepairRecordInput, Shipment, ShipmentInput,
    ShipmentRef, Trip, TripDriver, TripDriverInput, TripInput, TripRef, Vehicle, VehicleInput,
    VehicleRef, VehicleType, VehicleTypeInput, VehicleTypeRef,
};
use crate::transport::http::handlers::{customers, freight, health, personnel, repairs, vehicles};
use crate::transport::http::types::{AppState, ErrorBody};
use axum::routing::{delete, get};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        vehicles::list_vehicle_types,
        vehicles::create_vehicle_type,
        vehicles::update_vehicle_type,
        vehicles::delete_vehicle_type,
        vehicles::list_vehicles,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        personnel::list_employees,
        personnel::create_employee,
        personnel::update_employee,
        personnel::delete_employee,
        personnel::list_certifications,
        personnel::create_certification,
        personnel::update_certification,
        personnel::delete_certification,
        personnel::list_mechanics,
        personnel::create_mechanic,
        personnel::update_mechanic,
        personnel::delete_mechanic,
        repairs::list_repair_records,
        repairs::create_repair_record,
        repairs::update_repair_record,
        repairs::delete_repair_record,
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        customers::list_customer_phones,
        customers::create_customer_phone,
        customers::update_customer_phone,
        customers::delete_customer_phone,
        freight::list_shipments,
        freight::create_shipment,
        freight::update_shipment,
        freight::delete_shipment,
        freight::list_trips,
        freight::create_trip,
        freight::update_trip,
        freight::delete_trip,
        freight::list_drivers,
        freight::create_driver,
        freight::update_driver,
        freight::delete_driver,
        freight::list_trip_drivers,
        freight::create_trip_driver,
        freight::update_trip_driver,
        freight::delete_trip_driver
    ),
    components(schemas(
        ErrorBody,
        VehicleType,
        VehicleTypeInput,
        VehicleTypeRef,
        Vehicle,
        VehicleInput,
        VehicleRef,
        Employee,
        EmployeeInput,
        EmployeeRef,
        Certification,
        CertificationInput,
        Mechanic,
        MechanicInput,
        MechanicRef,
        RepairRecord,
        RepairRecordInput,
        Customer,
        CustomerInput,
        CustomerRef,
        CustomerPhone,
        CustomerPhoneInput,
        Shipment,
        ShipmentInput,
        ShipmentRef,
        Trip,
        TripInput,
        TripRef,
        Driver,
        DriverInput,
        DriverRef,
        TripDriver,
        TripDriverInput
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/vehicletypes",
            get(vehicles::list_vehicle_types)
                .post(vehicles::create_vehicle_type)
                .put(vehicles::update_vehicle_type),
        )
        .route("/vehicletypes/:id", delete(vehicles::delete_vehicle_type))
        .route(
            "/vehicles",
            get(vehicles::list_vehicles)
                .post(vehicles::create_vehicle)
                .put(vehicles::update_vehicle),
        )
        .route("/vehicles/:id", delete(vehicles::delete_vehicle))
        .route(
            "/employees",
            get(personnel::list_employees)
                .post(personnel::create_employee)
                .put(personnel::update_employee),
        )
        .route("/employees/:id", delete(personnel::delete_employee))
        .route(
            "/certifications",
            get(personnel::list_certifications)
                .post(personnel::create_certification)
                .put(personnel::update_certification),
        )
        .route("/certifications/:id", delete(personnel::delete_certification))
        .route(
            "/mechanics",
            get(personnel::list_mechanics)
                .post(personnel::create_mechanic)
                .put(personnel::update_mechanic),
        )
        .route("/mechanics/:id", delete(personnel::delete_mechanic))
        .route(
            "/repairrecords",
            get(repairs::list_repair_records)
                .post(repairs::create_repair_record)
                .put(repairs::update_repair_record),
        )
        .route("/repairrecords/:id", delete(repairs::delete_repair_record))
        .route(
            "/customers",
            get(customers::list_customers)
                .post(customers::create_customer)
                .put(customers::update_customer),
        )
        .route("/customers/:id", delete(customers::delete_customer))
        .route(
            "/customerphones",
            get(customers::list_customer_phones)
                .post(customers::create_customer_phone)
                .put(customers::update_customer_phone),
        )
        .route("/customerphones/:id", delete(customers::delete_customer_phone))
        .route(
            "/shipments",
            get(freight::list_shipments)
                .post(freight::create_shipment)
                .put(freight::update_shipment),
        )
        .route("/shipments/:id", delete(freight::delete_shipment))
        .route(
            "/trips",
            get(freight::list_trips)
                .post(freight::create_trip)
                .put(freight::update_trip),
        )
        .route("/trips/:id", delete(freight::delete_trip))
        .route(
            "/drivers",
            get(freight::list_drivers)
                .post(freight::create_driver)
                .put(freight::update_driver),
        )
        .route("/drivers/:id", delete(freight::delete_driver))
        .route(
            "/tripdrivers",
            get(freight::list_trip_drivers)
                .post(freight::create_trip_driver)
                .put(freight::update_trip_driver),
        )
        .route("/tripdrivers/:id", delete(freight::delete_trip_driver))
        .with_state(app_state)
}
