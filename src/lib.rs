//! Rentaldesk Equipment Rental Management
//!
//! An equipment rental back office served as a REST JSON API: inventory,
//! rentals, maintenance records, activity notifications and the derived
//! dashboard and report figures, persisted to a key-value store.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::{StorageBackend, StorageConfig};
use repository::{FileStore, MemoryStore, Repository};
use services::Services;
use store::{DataStore, Seed};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Open storage as configured, load or seed the collections and wire
    /// up the services
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let repository = open_repository(&config.storage)?;
        let seed = if config.storage.seed_demo_data {
            Seed::Demo
        } else {
            Seed::Empty
        };
        let store = DataStore::open(repository.clone(), seed)?;
        let services = Services::new(store, repository, config.rentals.clone())?;

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}

pub fn open_repository(config: &StorageConfig) -> AppResult<Repository> {
    Ok(match config.backend {
        StorageBackend::File => Repository::new(Arc::new(FileStore::open(&config.data_dir)?)),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, nothing will survive a restart");
            Repository::new(Arc::new(MemoryStore::new()))
        }
    })
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Session
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Equipment
        .route(
            "/equipment",
            get(api::equipment::list_equipment).post(api::equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            get(api::equipment::get_equipment)
                .put(api::equipment::update_equipment)
                .delete(api::equipment::delete_equipment),
        )
        // Rentals
        .route(
            "/rentals",
            get(api::rentals::list_rentals).post(api::rentals::create_rental),
        )
        .route("/rentals/calendar", get(api::rentals::rental_calendar))
        .route(
            "/rentals/:id",
            get(api::rentals::get_rental).put(api::rentals::update_rental),
        )
        .route("/rentals/:id/status", put(api::rentals::update_rental_status))
        // Maintenance
        .route(
            "/maintenance",
            get(api::maintenance::list_maintenance).post(api::maintenance::create_maintenance),
        )
        .route(
            "/maintenance/:id",
            get(api::maintenance::get_maintenance).put(api::maintenance::update_maintenance),
        )
        // Notifications
        .route("/notifications", get(api::notifications::list_notifications))
        .route("/notifications/unread-count", get(api::notifications::unread_count))
        .route("/notifications/:id/read", put(api::notifications::mark_read))
        // Dashboard and reports
        .route("/dashboard", get(api::stats::get_dashboard))
        .route("/reports/summary", get(api::stats::get_report_summary))
        .route("/reports/export", get(api::reports::export_report))
        // Feedback
        .route(
            "/feedback",
            get(api::feedback::list_feedback).post(api::feedback::submit_feedback),
        )
        // Settings
        .route(
            "/settings/theme",
            get(api::settings::get_theme).put(api::settings::update_theme),
        )
        .with_state(state);

    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
