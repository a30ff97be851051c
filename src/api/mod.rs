//! API handlers for Rentaldesk REST endpoints

pub mod auth;
pub mod equipment;
pub mod feedback;
pub mod health;
pub mod maintenance;
pub mod notifications;
pub mod openapi;
pub mod rentals;
pub mod reports;
pub mod settings;
pub mod stats;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, models::UserSession, AppState};

/// Extractor for the user of the current session
pub struct AuthenticatedUser(pub UserSession);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .services
            .auth
            .current_user()
            .await
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Authentication("Not logged in".to_string()))
    }
}
