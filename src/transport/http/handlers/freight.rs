//! `/shipments`, `/trips`, `/drivers` and `/tripdrivers` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{
    Driver, DriverInput, Shipment, ShipmentInput, Trip, TripDriver, TripDriverInput, TripInput,
};
use crate::domain::error::PersistenceError;
use crate::transport::http::types::{AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/shipments",
    responses(
        (status = 200, description = "All shipments", body = [Shipment]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_shipments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Shipment>>, PersistenceError> {
    Ok(Json(state.shipments.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/shipments",
    request_body = ShipmentInput,
    responses(
        (status = 201, description = "Shipment created", body = Shipment),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    Json(input): Json<ShipmentInput>,
) -> Result<(StatusCode, Json<Shipment>), PersistenceError> {
    let created = state.shipments.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/shipments",
    request_body = ShipmentInput,
    responses(
        (status = 201, description = "Shipment updated", body = Shipment),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Shipment not found", body = ErrorBody)
    )
)]
pub async fn update_shipment(
    State(state): State<AppState>,
    Json(input): Json<ShipmentInput>,
) -> Result<(StatusCode, Json<Shipment>), PersistenceError> {
    let updated = state.shipments.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/shipments/{id}",
    params(("id" = i64, Path, description = "Shipment identifier")),
    responses(
        (status = 204, description = "Shipment deleted"),
        (status = 404, description = "Shipment not found", body = ErrorBody)
    )
)]
pub async fn delete_shipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.shipments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/trips",
    responses(
        (status = 200, description = "All trips", body = [Trip]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, PersistenceError> {
    Ok(Json(state.trips.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/trips",
    request_body = TripInput,
    responses(
        (status = 201, description = "Trip created", body = Trip),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_trip(
    State(state): State<AppState>,
    Json(input): Json<TripInput>,
) -> Result<(StatusCode, Json<Trip>), PersistenceError> {
    let created = state.trips.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/trips",
    request_body = TripInput,
    responses(
        (status = 201, description = "Trip updated", body = Trip),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Trip not found", body = ErrorBody)
    )
)]
pub async fn update_trip(
    State(state): State<AppState>,
    Json(input): Json<TripInput>,
) -> Result<(StatusCode, Json<Trip>), PersistenceError> {
    let updated = state.trips.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/trips/{id}",
    params(("id" = i64, Path, description = "Trip identifier")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 404, description = "Trip not found", body = ErrorBody)
    )
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.trips.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/drivers",
    responses(
        (status = 200, description = "All drivers", body = [Driver]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, PersistenceError> {
    Ok(Json(state.drivers.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/drivers",
    request_body = DriverInput,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(input): Json<DriverInput>,
) -> Result<(StatusCode, Json<Driver>), PersistenceError> {
    let created = state.drivers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/drivers",
    request_body = DriverInput,
    responses(
        (status = 201, description = "Driver updated", body = Driver),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Driver not found", body = ErrorBody)
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Json(input): Json<DriverInput>,
) -> Result<(StatusCode, Json<Driver>), PersistenceError> {
    let updated = state.drivers.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    params(("id" = i64, Path, description = "Driver identifier")),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 404, description = "Driver not found", body = ErrorBody)
    )
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.drivers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/tripdrivers",
    responses(
        (status = 200, description = "All trip-driver assignments", body = [TripDriver]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_trip_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripDriver>>, PersistenceError> {
    Ok(Json(state.trip_drivers.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/tripdrivers",
    request_body = TripDriverInput,
    responses(
        (status = 201, description = "Assignment created", body = TripDriver),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_trip_driver(
    State(state): State<AppState>,
    Json(input): Json<TripDriverInput>,
) -> Result<(StatusCode, Json<TripDriver>), PersistenceError> {
    let created = state.trip_drivers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/tripdrivers",
    request_body = TripDriverInput,
    responses(
        (status = 201, description = "Assignment updated", body = TripDriver),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Assignment not found", body = ErrorBody)
    )
)]
pub async fn update_trip_driver(
    State(state): State<AppState>,
    Json(input): Json<TripDriverInput>,
) -> Result<(StatusCode, Json<TripDriver>), PersistenceError> {
    let updated = state.trip_drivers.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/tripdrivers/{id}",
    params(("id" = i64, Path, description = "Assignment identifier")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found", body = ErrorBody)
    )
)]
pub async fn delete_trip_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.trip_drivers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
