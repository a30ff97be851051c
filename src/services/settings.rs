//! User preference service

use crate::{
    error::AppResult,
    models::Theme,
    repository::{keys, Repository},
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Stored colour scheme, light when never set
    pub fn theme(&self) -> AppResult<Theme> {
        Ok(self.repository.load_value(keys::THEME)?.unwrap_or_default())
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<Theme> {
        self.repository.save_value(keys::THEME, &theme)?;
        tracing::info!(?theme, "Theme updated");
        Ok(theme)
    }
}
