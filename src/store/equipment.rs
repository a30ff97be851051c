//! Equipment mutations on DataStore

use super::DataStore;
use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        NotificationKind,
    },
    repository::keys,
};

impl DataStore {
    /// Append a new piece of equipment and announce it
    pub fn add_equipment(&mut self, data: CreateEquipment) -> AppResult<Equipment> {
        let id = self.next_id("eq");
        let equipment = Equipment::from_create(id, data);
        self.equipment.push(equipment.clone());
        self.repository.save(keys::EQUIPMENT, &self.equipment)?;

        tracing::info!(id = %equipment.id, name = %equipment.name, "Equipment added");
        self.notify(
            NotificationKind::Success,
            format!("New equipment \"{}\" added to inventory", equipment.name),
        )?;
        Ok(equipment)
    }

    /// Merge `data` over an existing record. A name change is written
    /// through to the rentals and maintenance records that reference it.
    pub fn update_equipment(&mut self, id: &str, data: UpdateEquipment) -> AppResult<Equipment> {
        let equipment = self
            .equipment
            .iter_mut()
            .find(|eq| eq.id == id)
            .ok_or_else(|| Self::not_found("Equipment", id))?;

        let previous_name = equipment.name.clone();
        equipment.apply(data);
        let updated = equipment.clone();
        self.repository.save(keys::EQUIPMENT, &self.equipment)?;

        tracing::info!(id, name = %updated.name, "Equipment updated");
        if updated.name != previous_name {
            self.propagate_equipment_name(id, &updated.name)?;
        }
        Ok(updated)
    }

    /// Remove a piece of equipment. Rentals and maintenance records that
    /// reference it are kept as they are.
    pub fn delete_equipment(&mut self, id: &str) -> AppResult<Equipment> {
        let index = self
            .equipment
            .iter()
            .position(|eq| eq.id == id)
            .ok_or_else(|| Self::not_found("Equipment", id))?;

        let removed = self.equipment.remove(index);
        self.repository.save(keys::EQUIPMENT, &self.equipment)?;

        tracing::info!(id, name = %removed.name, "Equipment deleted");
        self.notify(
            NotificationKind::Info,
            format!("Equipment \"{}\" removed from inventory", removed.name),
        )?;
        Ok(removed)
    }

    /// Rewrite the denormalized equipment name held by rentals and
    /// maintenance records; only collections that changed are persisted.
    fn propagate_equipment_name(&mut self, equipment_id: &str, name: &str) -> AppResult<()> {
        let mut rentals_changed = 0usize;
        for rental in self
            .rentals
            .iter_mut()
            .filter(|r| r.equipment_id == equipment_id && r.equipment_name != name)
        {
            rental.equipment_name = name.to_string();
            rentals_changed += 1;
        }
        if rentals_changed > 0 {
            self.repository.save(keys::RENTALS, &self.rentals)?;
        }

        let mut maintenance_changed = 0usize;
        for record in self
            .maintenance
            .iter_mut()
            .filter(|m| m.equipment_id == equipment_id && m.equipment_name != name)
        {
            record.equipment_name = name.to_string();
            maintenance_changed += 1;
        }
        if maintenance_changed > 0 {
            self.repository.save(keys::MAINTENANCE, &self.maintenance)?;
        }

        tracing::debug!(
            equipment_id,
            rentals_changed,
            maintenance_changed,
            "Propagated equipment rename"
        );
        Ok(())
    }
}
