//! `/employees`, `/certifications` and `/mechanics` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{
    Certification, CertificationInput, Employee, EmployeeInput, Mechanic, MechanicInput,
};
use crate::domain::error::PersistenceError;
use crate::transport::http::types::{AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, PersistenceError> {
    Ok(Json(state.employees.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), PersistenceError> {
    let created = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), PersistenceError> {
    let updated = state.employees.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/certifications",
    responses(
        (status = 200, description = "All certifications", body = [Certification]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_certifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Certification>>, PersistenceError> {
    Ok(Json(state.certifications.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/certifications",
    request_body = CertificationInput,
    responses(
        (status = 201, description = "Certification created", body = Certification),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_certification(
    State(state): State<AppState>,
    Json(input): Json<CertificationInput>,
) -> Result<(StatusCode, Json<Certification>), PersistenceError> {
    let created = state.certifications.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/certifications",
    request_body = CertificationInput,
    responses(
        (status = 201, description = "Certification updated", body = Certification),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Certification not found", body = ErrorBody)
    )
)]
pub async fn update_certification(
    State(state): State<AppState>,
    Json(input): Json<CertificationInput>,
) -> Result<(StatusCode, Json<Certification>), PersistenceError> {
    let updated = state.certifications.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/certifications/{id}",
    params(("id" = i64, Path, description = "Certification identifier")),
    responses(
        (status = 204, description = "Certification deleted"),
        (status = 404, description = "Certification not found", body = ErrorBody)
    )
)]
pub async fn delete_certification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.certifications.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/mechanics",
    responses(
        (status = 200, description = "All mechanics", body = [Mechanic]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_mechanics(
    State(state): State<AppState>,
) -> Result<Json<Vec<Mechanic>>, PersistenceError> {
    Ok(Json(state.mechanics.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/mechanics",
    request_body = MechanicInput,
    responses(
        (status = 201, description = "Mechanic created", body = Mechanic),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_mechanic(
    State(state): State<AppState>,
    Json(input): Json<MechanicInput>,
) -> Result<(StatusCode, Json<Mechanic>), PersistenceError> {
    let created = state.mechanics.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/mechanics",
    request_body = MechanicInput,
    responses(
        (status = 201, description = "Mechanic updated", body = Mechanic),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Mechanic not found", body = ErrorBody)
    )
)]
pub async fn update_mechanic(
    State(state): State<AppState>,
    Json(input): Json<MechanicInput>,
) -> Result<(StatusCode, Json<Mechanic>), PersistenceError> {
    let updated = state.mechanics.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/mechanics/{id}",
    params(("id" = i64, Path, description = "Mechanic identifier")),
    responses(
        (status = 204, description = "Mechanic deleted"),
        (status = 404, description = "Mechanic not found", body = ErrorBody)
    )
)]
pub async fn delete_mechanic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.mechanics.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
