//! Maintenance mutations on DataStore

use super::DataStore;
use crate::{
    error::AppResult,
    models::{
        maintenance::{Maintenance, NewMaintenance, UpdateMaintenance},
        NotificationKind,
    },
    repository::keys,
};

impl DataStore {
    /// Append a maintenance record and announce it
    pub fn add_maintenance(&mut self, data: NewMaintenance) -> AppResult<Maintenance> {
        let id = self.next_id("m");
        let record = Maintenance::from_new(id, data);
        self.maintenance.push(record.clone());
        self.repository.save(keys::MAINTENANCE, &self.maintenance)?;

        tracing::info!(
            id = %record.id,
            equipment_id = %record.equipment_id,
            kind = %record.kind,
            "Maintenance recorded"
        );
        self.notify(
            NotificationKind::Info,
            format!("Maintenance scheduled for {}", record.equipment_name),
        )?;
        Ok(record)
    }

    pub fn update_maintenance(
        &mut self,
        id: &str,
        mut data: UpdateMaintenance,
    ) -> AppResult<Maintenance> {
        if data.equipment_name.is_none() {
            if let Some(equipment_id) = data.equipment_id.as_deref() {
                data.equipment_name = self.find_equipment(equipment_id).map(|eq| eq.name.clone());
            }
        }

        let record = self
            .maintenance
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Self::not_found("Maintenance record", id))?;

        record.apply(data);
        let updated = record.clone();
        self.repository.save(keys::MAINTENANCE, &self.maintenance)?;

        tracing::info!(id, "Maintenance updated");
        Ok(updated)
    }
}
