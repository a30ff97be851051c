//! Rental endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        rental::{CreateRental, Rental, RentalQuery, RentalView, UpdateRental, UpdateRentalStatus},
        report::{CalendarDay, CalendarQuery},
    },
    AppState,
};

use super::AuthenticatedUser;

/// List rentals with their computed overdue flag
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "rentals",
    params(RentalQuery),
    responses(
        (status = 200, description = "Rental list", body = Vec<RentalView>)
    )
)]
pub async fn list_rentals(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<RentalQuery>,
) -> AppResult<Json<Vec<RentalView>>> {
    let rentals = state.services.rentals.list(&query, Utc::now()).await?;
    Ok(Json(rentals))
}

/// Get a rental
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    params(("id" = String, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental", body = RentalView),
        (status = 404, description = "Rental not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_rental(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<RentalView>> {
    let rental = state.services.rentals.get_by_id(&id, Utc::now()).await?;
    Ok(Json(rental))
}

/// Book equipment. Customers always book in their own name.
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    request_body = CreateRental,
    responses(
        (status = 201, description = "Rental created", body = Rental),
        (status = 400, description = "Invalid rental", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_rental(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(data): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    data.validate()?;
    let rental = state.services.rentals.create(&user, data).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// Edit any field of a rental
#[utoipa::path(
    put,
    path = "/rentals/{id}",
    tag = "rentals",
    params(("id" = String, Path, description = "Rental ID")),
    request_body = UpdateRental,
    responses(
        (status = 200, description = "Rental updated", body = Rental),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse),
        (status = 404, description = "Rental not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_rental(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<UpdateRental>,
) -> AppResult<Json<Rental>> {
    user.require_admin()?;
    data.validate()?;
    let rental = state.services.rentals.update(&id, data).await?;
    Ok(Json(rental))
}

/// Move a rental through its lifecycle (reserve, hand out, return)
#[utoipa::path(
    put,
    path = "/rentals/{id}/status",
    tag = "rentals",
    params(("id" = String, Path, description = "Rental ID")),
    request_body = UpdateRentalStatus,
    responses(
        (status = 200, description = "Status changed", body = Rental),
        (status = 404, description = "Rental not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_rental_status(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(data): Json<UpdateRentalStatus>,
) -> AppResult<Json<Rental>> {
    user.require_staff()?;
    let rental = state.services.rentals.update_status(&id, data.status).await?;
    Ok(Json(rental))
}

/// Rentals occupying a day, today by default
#[utoipa::path(
    get,
    path = "/rentals/calendar",
    tag = "rentals",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Rentals on the day", body = CalendarDay)
    )
)]
pub async fn rental_calendar(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarDay>> {
    let now = Utc::now();
    let date = query.date.unwrap_or_else(|| now.date_naive());
    let day = state.services.stats.calendar(date, now).await?;
    Ok(Json(day))
}
