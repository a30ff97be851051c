//! Preference endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Theme, AppState};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ThemeSettings {
    pub theme: Theme,
}

/// Get the colour scheme
#[utoipa::path(
    get,
    path = "/settings/theme",
    tag = "settings",
    responses(
        (status = 200, description = "Current theme", body = ThemeSettings)
    )
)]
pub async fn get_theme(State(state): State<AppState>) -> AppResult<Json<ThemeSettings>> {
    let theme = state.services.settings.theme()?;
    Ok(Json(ThemeSettings { theme }))
}

/// Set the colour scheme
#[utoipa::path(
    put,
    path = "/settings/theme",
    tag = "settings",
    request_body = ThemeSettings,
    responses(
        (status = 200, description = "Theme updated", body = ThemeSettings)
    )
)]
pub async fn update_theme(
    State(state): State<AppState>,
    Json(request): Json<ThemeSettings>,
) -> AppResult<Json<ThemeSettings>> {
    let theme = state.services.settings.set_theme(request.theme)?;
    Ok(Json(ThemeSettings { theme }))
}
