//! Dashboard and report figures

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::AppResult,
    models::report::{DashboardResponse, ReportSummary},
    AppState,
};

use super::AuthenticatedUser;

/// Dashboard KPIs with the overdue rentals and available equipment
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<DashboardResponse>> {
    Ok(Json(state.services.stats.dashboard(Utc::now()).await?))
}

/// Revenue, maintenance cost and inventory breakdowns
#[utoipa::path(
    get,
    path = "/reports/summary",
    tag = "stats",
    responses(
        (status = 200, description = "Report summary", body = ReportSummary),
        (status = 403, description = "Admin role required", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report_summary(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> AppResult<Json<ReportSummary>> {
    user.require_admin()?;
    Ok(Json(state.services.stats.summary(Utc::now()).await?))
}
