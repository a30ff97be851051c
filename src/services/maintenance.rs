//! Maintenance service

use super::SharedStore;
use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenance, Maintenance, MaintenanceQuery, NewMaintenance, UpdateMaintenance,
    },
};

#[derive(Clone)]
pub struct MaintenanceService {
    store: SharedStore,
}

impl MaintenanceService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: &MaintenanceQuery) -> AppResult<Vec<Maintenance>> {
        let store = self.store.read().await;
        Ok(store
            .maintenance()
            .iter()
            .filter(|m| m.matches(query))
            .cloned()
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Maintenance> {
        self.store
            .read()
            .await
            .find_maintenance(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Record maintenance against an existing piece of equipment
    pub async fn create(&self, data: CreateMaintenance) -> AppResult<Maintenance> {
        let mut store = self.store.write().await;
        let equipment_name = store
            .find_equipment(&data.equipment_id)
            .map(|eq| eq.name.clone())
            .ok_or_else(|| AppError::Validation("Please select valid equipment".to_string()))?;

        store.add_maintenance(NewMaintenance {
            equipment_id: data.equipment_id,
            equipment_name,
            date: data.date,
            kind: data.kind,
            notes: data.notes,
            cost: data.cost,
        })
    }

    pub async fn update(&self, id: &str, data: UpdateMaintenance) -> AppResult<Maintenance> {
        let mut store = self.store.write().await;
        if let Some(equipment_id) = data.equipment_id.as_deref() {
            if store.find_equipment(equipment_id).is_none() {
                return Err(AppError::Validation("Please select valid equipment".to_string()));
            }
        }
        store.update_maintenance(id, data)
    }
}
