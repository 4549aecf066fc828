//! Idempotent schema bootstrap.
//!
//! Tables are created in dependency order at startup; identifiers are
//! case-preserving, so every column name is quoted. Foreign-key columns are
//! nullable BIGINTs with referential constraints enforced by the engine.

use sqlx::PgPool;

const TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS vehicle_type (
        "VehicleTypeID" BIGSERIAL PRIMARY KEY,
        "VehicleTypeName" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS vehicle (
        "VehicleID" BIGSERIAL PRIMARY KEY,
        "VehicleTypeID" BIGINT REFERENCES vehicle_type ("VehicleTypeID"),
        "Brand" TEXT NOT NULL,
        "Load" BIGINT NOT NULL,
        "Capacity" BIGINT NOT NULL,
        "Year" BIGINT NOT NULL,
        "NumberOfRepairs" BIGINT NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS employee (
        "EmployeeID" BIGSERIAL PRIMARY KEY,
        "FirstName" TEXT NOT NULL,
        "Surname" TEXT NOT NULL,
        "Seniority" BIGINT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS certification (
        "CertificationID" BIGSERIAL PRIMARY KEY,
        "EmployeeID" BIGINT REFERENCES employee ("EmployeeID"),
        "VehicleTypeID" BIGINT REFERENCES vehicle_type ("VehicleTypeID")
    )"#,
    r#"CREATE TABLE IF NOT EXISTS mechanic (
        "MechanicID" BIGSERIAL PRIMARY KEY,
        "EmployeeID" BIGINT REFERENCES employee ("EmployeeID"),
        "VehicleTypeID" BIGINT REFERENCES vehicle_type ("VehicleTypeID")
    )"#,
    r#"CREATE TABLE IF NOT EXISTS repair_record (
        "RepairRecordID" BIGSERIAL PRIMARY KEY,
        "VehicleID" BIGINT REFERENCES vehicle ("VehicleID"),
        "MechanicID" BIGINT REFERENCES mechanic ("MechanicID"),
        "EstimatedTime" BIGINT NOT NULL,
        "ActualCostTime" BIGINT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS customer (
        "CustomerID" BIGSERIAL PRIMARY KEY,
        "CustomerName" TEXT NOT NULL,
        "CustomerAddress" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS customer_phone (
        "CustomerPhoneID" BIGSERIAL PRIMARY KEY,
        "CustomerID" BIGINT REFERENCES customer ("CustomerID"),
        "PhoneNumber" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS shipment (
        "ShipmentID" BIGSERIAL PRIMARY KEY,
        "CustomerID" BIGINT REFERENCES customer ("CustomerID"),
        "Weight" BIGINT NOT NULL,
        "Value" BIGINT NOT NULL,
        "OriginPlace" TEXT NOT NULL,
        "DestinationPlace" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS trip (
        "TripID" BIGSERIAL PRIMARY KEY,
        "VehicleID" BIGINT REFERENCES vehicle ("VehicleID"),
        "ShipmentID" BIGINT REFERENCES shipment ("ShipmentID"),
        "FromPlace" TEXT NOT NULL,
        "ToPlace" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS driver (
        "DriverID" BIGSERIAL PRIMARY KEY,
        "DriverName" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS trip_driver (
        "TripDriverID" BIGSERIAL PRIMARY KEY,
        "TripID" BIGINT REFERENCES trip ("TripID"),
        "DriverID" BIGINT REFERENCES driver ("DriverID")
    )"#,
];

/// Creates every entity table that does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
