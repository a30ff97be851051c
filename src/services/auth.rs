//! Session and identity provider
//!
//! Credentials are a fixed table of three demo accounts. A single logical
//! session is kept in memory and mirrored under the `currentUser` key so it
//! survives restarts.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Role, UserSession},
    repository::{keys, Repository},
};

struct Credential {
    id: &'static str,
    role: Role,
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

impl Credential {
    fn session(&self) -> UserSession {
        UserSession {
            id: self.id.to_string(),
            role: self.role,
            email: self.email.to_string(),
            name: self.name.to_string(),
        }
    }
}

const CREDENTIALS: &[Credential] = &[
    Credential {
        id: "1",
        role: Role::Admin,
        email: "admin@entnt.in",
        password: "admin123",
        name: "Admin User",
    },
    Credential {
        id: "2",
        role: Role::Staff,
        email: "staff@entnt.in",
        password: "staff123",
        name: "Staff Member",
    },
    Credential {
        id: "3",
        role: Role::Customer,
        email: "customer@entnt.in",
        password: "cust123",
        name: "Customer User",
    },
];

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    session: Arc<RwLock<Option<UserSession>>>,
}

impl AuthService {
    /// Restore the persisted session, if any
    pub fn new(repository: Repository) -> AppResult<Self> {
        let session: Option<UserSession> = repository.load_value(keys::CURRENT_USER)?;
        if let Some(user) = &session {
            tracing::info!(user_id = %user.id, role = %user.role, "Restored session");
        }
        Ok(Self {
            repository,
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Exact match on email and password. On success the session replaces
    /// any previous one and is persisted.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<bool> {
        let Some(credential) = CREDENTIALS
            .iter()
            .find(|c| c.email == email && c.password == password)
        else {
            tracing::warn!(email, "Login failed");
            return Ok(false);
        };

        let user = credential.session();
        let mut session = self.session.write().await;
        self.repository.save_value(keys::CURRENT_USER, &user)?;
        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        *session = Some(user);
        Ok(true)
    }

    pub async fn logout(&self) -> AppResult<()> {
        let mut session = self.session.write().await;
        if let Some(user) = session.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        self.repository.remove(keys::CURRENT_USER)
    }

    pub async fn current_user(&self) -> Option<UserSession> {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_with_known_credentials() {
        let auth = AuthService::new(Repository::in_memory()).unwrap();
        assert!(!auth.is_authenticated().await);

        assert!(auth.login("staff@entnt.in", "staff123").await.unwrap());
        let user = auth.current_user().await.unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.name, "Staff Member");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let auth = AuthService::new(Repository::in_memory()).unwrap();
        assert!(!auth.login("admin@entnt.in", "admin").await.unwrap());
        assert!(!auth.login("ADMIN@entnt.in", "admin123").await.unwrap());
        assert!(auth.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_session_survives_restart_until_logout() {
        let repository = Repository::in_memory();
        let auth = AuthService::new(repository.clone()).unwrap();
        auth.login("customer@entnt.in", "cust123").await.unwrap();

        let restored = AuthService::new(repository.clone()).unwrap();
        assert_eq!(restored.current_user().await.unwrap().role, Role::Customer);

        restored.logout().await.unwrap();
        assert!(!restored.is_authenticated().await);
        let reopened = AuthService::new(repository).unwrap();
        assert!(reopened.current_user().await.is_none());
    }
}
