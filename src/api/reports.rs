//! Report download endpoint

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::{AppResult, ErrorResponse},
    models::report::ExportQuery,
    AppState,
};

use super::AuthenticatedUser;

/// Download the report as an HTML attachment
#[utoipa::path(
    get,
    path = "/reports/export",
    tag = "reports",
    params(ExportQuery),
    responses(
        (status = 200, description = "HTML report", content_type = "text/html", body = String),
        (status = 403, description = "Staff or admin role required", body = ErrorResponse)
    )
)]
pub async fn export_report(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    user.require_staff()?;
    let export = state
        .services
        .reports
        .export(query.kind, &user, Utc::now())
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.html,
    ))
}
