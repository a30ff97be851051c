//! Session endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, SessionResponse},
    AppState,
};

/// Log in with one of the known accounts
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    request.validate()?;

    if !state.services.auth.login(&request.email, &request.password).await? {
        return Err(AppError::Authentication("Invalid email or password".to_string()));
    }

    Ok(Json(SessionResponse {
        is_authenticated: true,
        user: state.services.auth.current_user().await,
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Logged out")
    )
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.services.auth.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current session state; never fails when logged out
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Session state", body = SessionResponse)
    )
)]
pub async fn me(State(state): State<AppState>) -> Json<SessionResponse> {
    let user = state.services.auth.current_user().await;
    Json(SessionResponse {
        is_authenticated: user.is_some(),
        user,
    })
}
