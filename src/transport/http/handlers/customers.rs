//! `/customers` and `/customerphones` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{Customer, CustomerInput, CustomerPhone, CustomerPhoneInput};
use crate::domain::error::PersistenceError;
use crate::transport::http::types::{AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, PersistenceError> {
    Ok(Json(state.customers.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>), PersistenceError> {
    let created = state.customers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer updated", body = Customer),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Customer not found", body = ErrorBody)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>), PersistenceError> {
    let updated = state.customers.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ErrorBody)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/customerphones",
    responses(
        (status = 200, description = "All customer phone numbers", body = [CustomerPhone]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_customer_phones(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerPhone>>, PersistenceError> {
    Ok(Json(state.customer_phones.get_all().await?))
}

#[utoipa::path(
    post,
    path = "/customerphones",
    request_body = CustomerPhoneInput,
    responses(
        (status = 201, description = "Customer phone created", body = CustomerPhone),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Identifier already exists", body = ErrorBody)
    )
)]
pub async fn create_customer_phone(
    State(state): State<AppState>,
    Json(input): Json<CustomerPhoneInput>,
) -> Result<(StatusCode, Json<CustomerPhone>), PersistenceError> {
    let created = state.customer_phones.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/customerphones",
    request_body = CustomerPhoneInput,
    responses(
        (status = 201, description = "Customer phone updated", body = CustomerPhone),
        (status = 400, description = "Validation failed or identifier missing", body = ErrorBody),
        (status = 404, description = "Customer phone not found", body = ErrorBody)
    )
)]
pub async fn update_customer_phone(
    State(state): State<AppState>,
    Json(input): Json<CustomerPhoneInput>,
) -> Result<(StatusCode, Json<CustomerPhone>), PersistenceError> {
    let updated = state.customer_phones.update(input).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/customerphones/{id}",
    params(("id" = i64, Path, description = "Customer phone identifier")),
    responses(
        (status = 204, description = "Customer phone deleted"),
        (status = 404, description = "Customer phone not found", body = ErrorBody)
    )
)]
pub async fn delete_customer_phone(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PersistenceError> {
    state.customer_phones.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
