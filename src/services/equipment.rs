//! Equipment service

use chrono::{DateTime, Utc};

use super::{stats, SharedStore};
use crate::{
    error::{AppError, AppResult},
    models::equipment::{
        CreateEquipment, Equipment, EquipmentDetails, EquipmentQuery, UpdateEquipment,
    },
};

#[derive(Clone)]
pub struct EquipmentService {
    store: SharedStore,
}

impl EquipmentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        let store = self.store.read().await;
        Ok(store
            .equipment()
            .iter()
            .filter(|eq| eq.matches(query))
            .cloned()
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.store
            .read()
            .await
            .find_equipment(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Equipment with every rental and maintenance record that references it
    pub async fn details(&self, id: &str, now: DateTime<Utc>) -> AppResult<EquipmentDetails> {
        let store = self.store.read().await;
        let equipment = store
            .find_equipment(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let rentals = store
            .rentals()
            .iter()
            .filter(|r| r.equipment_id == id)
            .map(|r| stats::rental_view(r, now))
            .collect();
        let maintenance = store
            .maintenance()
            .iter()
            .filter(|m| m.equipment_id == id)
            .cloned()
            .collect();

        Ok(EquipmentDetails {
            equipment,
            rentals,
            maintenance,
        })
    }

    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        self.store.write().await.add_equipment(data)
    }

    pub async fn update(&self, id: &str, data: UpdateEquipment) -> AppResult<Equipment> {
        self.store.write().await.update_equipment(id, data)
    }

    pub async fn delete(&self, id: &str) -> AppResult<Equipment> {
        self.store.write().await.delete_equipment(id)
    }
}
