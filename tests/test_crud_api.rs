//! End-to-end CRUD tests against a live PostgreSQL.
//!
//! These need `DATABASE_URL` (a `.env` file works); without it each test
//! prints a notice and passes vacuously. Rows use high explicit identifiers
//! so concurrent tests and pre-existing data stay out of each other's way,
//! and every test cleans up what it created.

use freight_backoffice::storage::schema;
use freight_backoffice::{create_router, AppState};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;

async fn spawn_app() -> Option<String> {
    dotenv::dotenv().ok();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping live-database test");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("database connection");
    schema::ensure_schema(&pool).await.expect("schema");
    let router = create_router(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Some(format!("http://{addr}"))
}

#[tokio::test]
async fn vehicle_type_crud_round_trip() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let new_type = json!({ "VehicleTypeID": 9101, "VehicleTypeName": "Motorcycle" });
    let response = client
        .post(format!("{base}/vehicletypes"))
        .json(&new_type)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["VehicleTypeID"], 9101);
    assert_eq!(created["VehicleTypeName"], "Motorcycle");

    // Creating the same identifier again conflicts.
    let response = client
        .post(format!("{base}/vehicletypes"))
        .json(&new_type)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "VehicleTypeID already exists");

    // The listing includes it.
    let all: Vec<Value> = client
        .get(format!("{base}/vehicletypes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(all.iter().any(|t| t["VehicleTypeID"] == 9101));

    // Full-replace update.
    let response = client
        .put(format!("{base}/vehicletypes"))
        .json(&json!({ "VehicleTypeID": 9101, "VehicleTypeName": "Ferry" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["VehicleTypeName"], "Ferry");

    // Delete, then the same delete again 404s.
    let response = client
        .delete(format!("{base}/vehicletypes/9101"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{base}/vehicletypes/9101"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "VehicleType not found");
}

#[tokio::test]
async fn updating_a_missing_row_is_not_found() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{base}/drivers"))
        .json(&json!({ "DriverID": 9999999, "DriverName": "Max Holden" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Driver not found");
}

#[tokio::test]
async fn deleting_a_missing_identifier_is_not_found() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/employees/9999999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Employee not found");
}

#[tokio::test]
async fn listing_is_idempotent_without_writes() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let first: Vec<Value> = client
        .get(format!("{base}/shipments"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Vec<Value> = client
        .get(format!("{base}/shipments"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_wipes_omitted_fields() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/vehicles"))
        .json(&json!({
            "VehicleID": 9201,
            "Brand": "Scott Ltd",
            "Load": 8641,
            "Capacity": 24792,
            "Year": 2018
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // Load, Capacity and Year are omitted: full-replace resets them to zero.
    let response = client
        .put(format!("{base}/vehicles"))
        .json(&json!({ "VehicleID": 9201, "Brand": "Scott Ltd" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["Load"], 0);
    assert_eq!(updated["Capacity"], 0);
    assert_eq!(updated["Year"], 0);

    let response = client
        .delete(format!("{base}/vehicles/9201"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn repair_records_move_the_vehicle_counter() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/vehicles"))
        .json(&json!({
            "VehicleID": 9301,
            "Brand": "Young and Sons",
            "Load": 9942,
            "Capacity": 16923,
            "Year": 2003,
            "NumberOfRepairs": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let fetch_counter = || async {
        let all: Vec<Value> = client
            .get(format!("{base}/vehicles"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        all.into_iter()
            .find(|v| v["VehicleID"] == 9301)
            .map(|v| v["NumberOfRepairs"].as_i64().unwrap())
            .unwrap()
    };

    // Creating a record referencing the vehicle increments its counter.
    let response = client
        .post(format!("{base}/repairrecords"))
        .json(&json!({
            "RepairRecordID": 9302,
            "Vehicle": { "VehicleID": 9301 },
            "EstimatedTime": 13,
            "ActualCostTime": 15
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    assert_eq!(fetch_counter().await, 1);

    // Updating the record leaves the counter alone.
    let response = client
        .put(format!("{base}/repairrecords"))
        .json(&json!({
            "RepairRecordID": 9302,
            "Vehicle": { "VehicleID": 9301 },
            "EstimatedTime": 13,
            "ActualCostTime": 17
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    assert_eq!(fetch_counter().await, 1);

    // Deleting the record decrements it.
    let response = client
        .delete(format!("{base}/repairrecords/9302"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
    assert_eq!(fetch_counter().await, 0);

    let response = client
        .delete(format!("{base}/vehicles/9301"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn vehicle_type_with_vehicles_cannot_be_deleted() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/vehicletypes"))
        .json(&json!({ "VehicleTypeID": 9401, "VehicleTypeName": "long haul trucks" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{base}/vehicles"))
        .json(&json!({
            "VehicleID": 9402,
            "VehicleType": { "VehicleTypeID": 9401 },
            "Brand": "Landry PLC",
            "Load": 7993,
            "Capacity": 10866,
            "Year": 2017
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // Guarded while the vehicle exists.
    let response = client
        .delete(format!("{base}/vehicletypes/9401"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Cannot delete VehicleType with associated Vehicles");

    // Free again once the vehicle is gone.
    let response = client
        .delete(format!("{base}/vehicles/9402"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{base}/vehicletypes/9401"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn created_references_come_back_on_reads() {
    let Some(base) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/customers"))
        .json(&json!({
            "CustomerID": 9501,
            "CustomerName": "Howard-Cardenas",
            "CustomerAddress": "76695 Kenneth Union Suite 969"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{base}/customerphones"))
        .json(&json!({
            "CustomerPhoneID": 9502,
            "Customer": { "CustomerID": 9501 },
            "PhoneNumber": "901-329-8055x784"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["Customer"]["CustomerID"], 9501);

    let all: Vec<Value> = client
        .get(format!("{base}/customerphones"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let phone = all.iter().find(|p| p["CustomerPhoneID"] == 9502).unwrap();
    assert_eq!(phone["Customer"]["CustomerID"], 9501);
    assert_eq!(phone["PhoneNumber"], "901-329-8055x784");

    for path in ["customerphones/9502", "customers/9501"] {
        let response = client.delete(format!("{base}/{path}")).send().await.unwrap();
        assert_eq!(response.status(), 204);
    }
}
