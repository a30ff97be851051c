//! Customer feedback endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppResult, ErrorResponse},
    models::feedback::{CreateFeedback, Feedback, FeedbackSummary},
    AppState,
};

use super::AuthenticatedUser;

/// Submit feedback about a piece of equipment
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "feedback",
    request_body = CreateFeedback,
    responses(
        (status = 201, description = "Feedback recorded", body = Feedback),
        (status = 403, description = "Customer role required", body = ErrorResponse)
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(data): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    user.require_customer()?;
    data.validate()?;
    let feedback = state.services.feedback.submit(&user, data, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// All feedback with average rating and positive share
#[utoipa::path(
    get,
    path = "/feedback",
    tag = "feedback",
    responses(
        (status = 200, description = "Feedback summary", body = FeedbackSummary),
        (status = 403, description = "Staff or admin role required", body = ErrorResponse)
    )
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> AppResult<Json<FeedbackSummary>> {
    user.require_staff()?;
    Ok(Json(state.services.feedback.summary().await?))
}
