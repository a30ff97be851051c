//! Rental management service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{stats, SharedStore};
use crate::{
    config::RentalsConfig,
    error::{AppError, AppResult},
    models::{
        rental::{CreateRental, NewRental, Rental, RentalQuery, RentalView, UpdateRental},
        EquipmentStatus, RentalStatus, UserSession,
    },
};

#[derive(Clone)]
pub struct RentalsService {
    store: SharedStore,
    config: RentalsConfig,
}

impl RentalsService {
    pub fn new(store: SharedStore, config: RentalsConfig) -> Self {
        Self { store, config }
    }

    /// Rentals matching `query`, each with its computed overdue flag
    pub async fn list(
        &self,
        query: &RentalQuery,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<RentalView>> {
        let store = self.store.read().await;
        Ok(store
            .rentals()
            .iter()
            .filter(|r| r.matches(query))
            .map(|r| stats::rental_view(r, now))
            .collect())
    }

    pub async fn get_by_id(&self, id: &str, now: DateTime<Utc>) -> AppResult<RentalView> {
        let store = self.store.read().await;
        store
            .find_rental(id)
            .map(|r| stats::rental_view(r, now))
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", id)))
    }

    /// Create a rental for `user`.
    ///
    /// Only available equipment can be booked. Customers always rent in
    /// their own name and start as `Reserved`; staff may book on behalf of
    /// someone else and pick the initial status. Without an explicit total
    /// cost the rental is priced at the configured daily rate.
    pub async fn create(&self, user: &UserSession, data: CreateRental) -> AppResult<Rental> {
        let mut store = self.store.write().await;
        let equipment = store
            .find_equipment(&data.equipment_id)
            .ok_or_else(|| AppError::Validation("Please select valid equipment".to_string()))?;
        if equipment.status != EquipmentStatus::Available {
            return Err(AppError::Validation(format!(
                "{} is not available for rental",
                equipment.name
            )));
        }
        let equipment_name = equipment.name.clone();

        let (customer_id, customer_name) = if user.is_customer() {
            (user.id.clone(), user.name.clone())
        } else {
            (
                data.customer_id.unwrap_or_else(|| user.id.clone()),
                data.customer_name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| user.name.clone()),
            )
        };

        let status = if user.is_customer() {
            RentalStatus::Reserved
        } else {
            data.status.unwrap_or(RentalStatus::Reserved)
        };

        let days = (data.end_date - data.start_date).num_days().max(0);
        let total_cost = data
            .total_cost
            .unwrap_or_else(|| Decimal::from(days) * self.config.daily_rate);

        store.add_rental(NewRental {
            equipment_id: data.equipment_id,
            customer_id,
            customer_name,
            equipment_name,
            start_date: data.start_date,
            end_date: data.end_date,
            status,
            total_cost: Some(total_cost),
        })
    }

    /// Full edit. The resulting period must still end after it starts.
    pub async fn update(&self, id: &str, data: UpdateRental) -> AppResult<Rental> {
        let mut store = self.store.write().await;
        let current = store
            .find_rental(id)
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", id)))?;

        let start = data.start_date.unwrap_or(current.start_date);
        let end = data.end_date.unwrap_or(current.end_date);
        if end <= start {
            return Err(AppError::Validation(
                "End date must be after start date".to_string(),
            ));
        }
        if let Some(equipment_id) = data.equipment_id.as_deref() {
            if store.find_equipment(equipment_id).is_none() {
                return Err(AppError::Validation("Please select valid equipment".to_string()));
            }
        }

        store.update_rental(id, data)
    }

    pub async fn update_status(&self, id: &str, status: RentalStatus) -> AppResult<Rental> {
        self.store.write().await.update_rental(
            id,
            UpdateRental {
                status: Some(status),
                ..Default::default()
            },
        )
    }
}
