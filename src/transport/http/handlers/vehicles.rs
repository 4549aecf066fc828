//! `/vehicletypes` and `/vehicles` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{Vehicle, VehicleInput, VehicleType, VehicleTypeInput};
use crate::domain::error::PersistenceError;
use crate::transport::http::types::{AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/vehicletypes",
    responses(
        (status = 200, description = "All vehicle types", body = [VehicleType]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_vehicle_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleType>>, PersistenceError> {
    Ok(Json(state.vehicle_types.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/vehicletypes",
    request_body = VehicleTypeInput,
    responses(
        (status = 201, description = "Vehicle type created", body = VehicleType),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_vehicle_type(
    State(state): State<AppState>,
    Json(input): Json<VehicleTypeInput>,
) -> Result<(StatusCode, Json<VehicleType>), PersistenceError> {
    let created = state.vehicle_types.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/vehicletypes",
    request_body = VehicleTypeInput,
    responses(
        (status = 201, description = "Vehicle type updated", body = VehicleType),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Vehicle type not found", body = ErrorBody)
    )
)]
pub async fn update_vehicle_type(
    State(state): State<AppState>,
    Json(input): Json<VehicleTypeInput>,
) -> Result<(StatusCode, Json<VehicleType>), PersistenceError> {
    let updated = state.vehicle_types.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/vehicletypes/{id}",
    params(("id" = i64, Path, description = "Vehicle type identifier")),
    responses(
        (status = 204, description = "Vehicle type deleted"),
        (status = 400, description = "Vehicles still reference this type", body = ErrorBody),
        (status = 404, description = "Vehicle type not found", body = ErrorBody)
    )
)]
pub async fn delete_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.vehicle_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/vehicles",
    responses(
        (status = 200, description = "All vehicles", body = [Vehicle]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, PersistenceError> {
    Ok(Json(state.vehicles.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleInput,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(input): Json<VehicleInput>,
) -> Result<(StatusCode, Json<Vehicle>), PersistenceError> {
    let created = state.vehicles.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/vehicles",
    request_body = VehicleInput,
    responses(
        (status = 201, description = "Vehicle updated", body = Vehicle),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Json(input): Json<VehicleInput>,
) -> Result<(StatusCode, Json<Vehicle>), PersistenceError> {
    let updated = state.vehicles.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
