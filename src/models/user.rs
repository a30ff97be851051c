//! Session user model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Role;
use crate::error::{AppError, AppResult};

/// The authenticated user, persisted under the `currentUser` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSession {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub name: String,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_staff_or_admin(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Staff)
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if !self.is_admin() {
            return Err(AppError::Authorization("Admin role required".to_string()));
        }
        Ok(())
    }

    pub fn require_staff(&self) -> AppResult<()> {
        if !self.is_staff_or_admin() {
            return Err(AppError::Authorization("Staff or admin role required".to_string()));
        }
        Ok(())
    }

    pub fn require_customer(&self) -> AppResult<()> {
        if !self.is_customer() {
            return Err(AppError::Authorization("Customer role required".to_string()));
        }
        Ok(())
    }
}

/// Login request. The email is matched against the credential table as
/// given, so a malformed address is just another failed login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Current session state
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<UserSession>,
}
