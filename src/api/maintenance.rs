//! Maintenance endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppResult, ErrorResponse},
    models::maintenance::{CreateMaintenance, Maintenance, MaintenanceQuery, UpdateMaintenance},
    AppState,
};

use super::AuthenticatedUser;

/// List maintenance records
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Maintenance records", body = Vec<Maintenance>),
        (status = 403, description = "Staff or admin role required", body = ErrorResponse)
    )
)]
pub async fn list_maintenance(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<MaintenanceQuery>,
) -> AppResult<Json<Vec<Maintenance>>> {
    user.require_staff()?;
    let records = state.services.maintenance.list(&query).await?;
    Ok(Json(records))
}

/// Get a maintenance record
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = String, Path, description = "Maintenance record ID")),
    responses(
        (status = 200, description = "Maintenance record", body = Maintenance),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Maintenance>> {
    user.require_staff()?;
    let record = state.services.maintenance.get_by_id(&id).await?;
    Ok(Json(record))
}

/// Schedule maintenance
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenance,
    responses(
        (status = 201, description = "Maintenance scheduled", body = Maintenance),
        (status = 400, description = "Invalid record", body = ErrorResponse)
    )
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    user.require_staff()?;
    data.validate()?;
    let record = state.services.maintenance.create(data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a maintenance record
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = String, Path, description = "Maintenance record ID")),
    request_body = UpdateMaintenance,
    responses(
        (status = 200, description = "Record updated", body = Maintenance),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<UpdateMaintenance>,
) -> AppResult<Json<Maintenance>> {
    user.require_staff()?;
    data.validate()?;
    let record = state.services.maintenance.update(&id, data).await?;
    Ok(Json(record))
}
