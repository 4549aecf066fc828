//! `/repairrecords` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{RepairRecord, RepairRecordInput};
use crate::domain::error::PersistenceError;
use crate::transport::http::types::{AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/repairrecords",
    responses(
        (status = 200, description = "All repair records", body = [RepairRecord]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_repair_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepairRecord>>, PersistenceError> {
    Ok(Json(state.repair_records.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/repairrecords",
    request_body = RepairRecordInput,
    responses(
        (status = 201, description = "Repair record created; the referenced vehicle's counter is incremented", body = RepairRecord),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_repair_record(
    State(state): State<AppState>,
    Json(input): Json<RepairRecordInput>,
) -> Result<(StatusCode, Json<RepairRecord>), PersistenceError> {
    let created = state.repair_records.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/repairrecords",
    request_body = RepairRecordInput,
    responses(
        (status = 201, description = "Repair record updated (counter untouched)", body = RepairRecord),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Repair record not found", body = ErrorBody)
    )
)]
pub async fn update_repair_record(
    State(state): State<AppState>,
    Json(input): Json<RepairRecordInput>,
) -> Result<(StatusCode, Json<RepairRecord>), PersistenceError> {
    let updated = state.repair_records.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/repairrecords/{id}",
    params(("id" = i64, Path, description = "Repair record identifier")),
    responses(
        (status = 204, description = "Repair record deleted; the referenced vehicle's counter is decremented"),
        (status = 404, description = "Repair record not found", body = ErrorBody)
    )
)]
pub async fn delete_repair_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.repair_records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
