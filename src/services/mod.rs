//! Business logic services

pub mod auth;
pub mod equipment;
pub mod feedback;
pub mod maintenance;
pub mod notifications;
pub mod rentals;
pub mod reports;
pub mod settings;
pub mod stats;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::RentalsConfig, error::AppResult, repository::Repository, store::DataStore};

/// The data store shared between services. Writers take the lock for the
/// whole synchronous mutation, so there is a single writer at a time.
pub type SharedStore = Arc<RwLock<DataStore>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub rentals: rentals::RentalsService,
    pub maintenance: maintenance::MaintenanceService,
    pub notifications: notifications::NotificationsService,
    pub stats: stats::StatsService,
    pub reports: reports::ReportsService,
    pub auth: auth::AuthService,
    pub feedback: feedback::FeedbackService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services around an opened store. `repository` must be the
    /// one the store was opened with; the session, theme and feedback keys
    /// live next to the collections.
    pub fn new(
        store: DataStore,
        repository: Repository,
        rentals_config: RentalsConfig,
    ) -> AppResult<Self> {
        let store: SharedStore = Arc::new(RwLock::new(store));
        Ok(Self {
            equipment: equipment::EquipmentService::new(store.clone()),
            rentals: rentals::RentalsService::new(store.clone(), rentals_config),
            maintenance: maintenance::MaintenanceService::new(store.clone()),
            notifications: notifications::NotificationsService::new(store.clone()),
            stats: stats::StatsService::new(store.clone()),
            reports: reports::ReportsService::new(store.clone()),
            auth: auth::AuthService::new(repository.clone())?,
            feedback: feedback::FeedbackService::new(store, repository.clone()),
            settings: settings::SettingsService::new(repository),
        })
    }
}
