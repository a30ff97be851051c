//! In-memory data store
//!
//! [`DataStore`] is the single owner and sole mutator of the four
//! collections. Every mutation runs to completion synchronously: the
//! collection is changed in memory, written back whole through the
//! [`Repository`], and any derived notification is prepended and
//! persisted before the call returns. If persistence fails the in-memory
//! change stands and the error is returned to the caller.
//!
//! The store performs no validation of its inputs; callers validate at
//! the API boundary. Updates, deletes and mark-read on an unknown id
//! return [`AppError::NotFound`] and leave every collection untouched.

mod equipment;
mod maintenance;
mod notifications;
mod rentals;
pub mod seed;

use serde::{de::DeserializeOwned, Serialize};
use snowflaked::Generator;

use crate::{
    error::{AppError, AppResult},
    models::{Equipment, Maintenance, Notification, Rental},
    repository::{keys, Repository},
};

pub use seed::Seed;

/// Owner of the equipment, rental, maintenance and notification collections
pub struct DataStore {
    repository: Repository,
    ids: Generator,
    equipment: Vec<Equipment>,
    rentals: Vec<Rental>,
    maintenance: Vec<Maintenance>,
    notifications: Vec<Notification>,
}

impl DataStore {
    /// Load every collection from the repository, falling back to `seed`
    /// for collections that were never persisted. Seeded collections are
    /// written back immediately.
    pub fn open(repository: Repository, seed: Seed) -> AppResult<Self> {
        let fixtures = seed.fixtures();

        let equipment = load_or_seed(&repository, keys::EQUIPMENT, fixtures.equipment)?;
        let rentals = load_or_seed(&repository, keys::RENTALS, fixtures.rentals)?;
        let maintenance = load_or_seed(&repository, keys::MAINTENANCE, fixtures.maintenance)?;
        let notifications = load_or_seed(&repository, keys::NOTIFICATIONS, Vec::new())?;

        tracing::info!(
            equipment = equipment.len(),
            rentals = rentals.len(),
            maintenance = maintenance.len(),
            notifications = notifications.len(),
            "Data store ready"
        );

        Ok(Self {
            repository,
            ids: Generator::new(0),
            equipment,
            rentals,
            maintenance,
            notifications,
        })
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn maintenance(&self) -> &[Maintenance] {
        &self.maintenance
    }

    /// Newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn find_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|eq| eq.id == id)
    }

    pub fn find_rental(&self, id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.id == id)
    }

    pub fn find_maintenance(&self, id: &str) -> Option<&Maintenance> {
        self.maintenance.iter().find(|m| m.id == id)
    }

    /// Time-ordered id with a collection prefix, e.g. `eq7204...`
    fn next_id(&mut self, prefix: &str) -> String {
        let id: u64 = self.ids.generate();
        format!("{}{}", prefix, id)
    }

    fn not_found(kind: &str, id: &str) -> AppError {
        tracing::warn!(kind, id, "Mutation on unknown record ignored");
        AppError::NotFound(format!("{} {} not found", kind, id))
    }
}

fn load_or_seed<T: Serialize + DeserializeOwned>(
    repository: &Repository,
    key: &str,
    fallback: Vec<T>,
) -> AppResult<Vec<T>> {
    match repository.load(key)? {
        Some(records) => Ok(records),
        None => {
            tracing::info!(key, count = fallback.len(), "No persisted collection, seeding");
            repository.save(key, &fallback)?;
            Ok(fallback)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::models::{
        equipment::CreateEquipment, EquipmentCondition, EquipmentStatus, RentalStatus,
    };
    use crate::repository::MockKeyValueStore;

    pub(crate) fn empty_store() -> DataStore {
        DataStore::open(Repository::in_memory(), Seed::Empty).unwrap()
    }

    #[test]
    fn test_open_seeds_and_persists_demo_data() {
        let repository = Repository::in_memory();
        let store = DataStore::open(repository.clone(), Seed::Demo).unwrap();

        assert_eq!(store.equipment().len(), 5);
        assert_eq!(store.rentals().len(), 2);
        assert_eq!(store.maintenance().len(), 2);
        assert!(store.notifications().is_empty());

        let persisted: Vec<Equipment> = repository.load(keys::EQUIPMENT).unwrap().unwrap();
        assert_eq!(persisted, store.equipment());
    }

    #[test]
    fn test_open_prefers_persisted_collections() {
        let repository = Repository::in_memory();
        {
            let mut store = DataStore::open(repository.clone(), Seed::Demo).unwrap();
            store.delete_equipment("eq3").unwrap();
        }
        let reopened = DataStore::open(repository, Seed::Demo).unwrap();
        assert_eq!(reopened.equipment().len(), 4);
        assert!(reopened.find_equipment("eq3").is_none());
        assert_eq!(reopened.notifications().len(), 1);
    }

    #[test]
    fn test_open_fails_fast_on_corrupt_collection() {
        let repository = Repository::in_memory();
        repository.save_value(keys::RENTALS, "not an array").unwrap();
        let result = DataStore::open(repository, Seed::Demo);
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[test]
    fn test_demo_seed_matches_reference_statuses() {
        let store = DataStore::open(Repository::in_memory(), Seed::Demo).unwrap();
        let rented = store
            .equipment()
            .iter()
            .filter(|eq| eq.status == EquipmentStatus::Rented)
            .count();
        assert_eq!(rented, 1);
        assert_eq!(store.find_rental("r2").unwrap().status, RentalStatus::Overdue);
    }

    #[test]
    fn test_failed_persistence_keeps_in_memory_mutation() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        // the four seeding writes succeed, everything after fails
        let writes = AtomicUsize::new(0);
        backend.expect_set().returning(move |_, _| {
            if writes.fetch_add(1, Ordering::SeqCst) < 4 {
                Ok(())
            } else {
                Err(AppError::Storage("medium unavailable".into()))
            }
        });
        let mut store = DataStore::open(Repository::new(Arc::new(backend)), Seed::Empty).unwrap();

        let result = store.add_equipment(CreateEquipment {
            name: "Scissor Lift".into(),
            category: "Access".into(),
            condition: EquipmentCondition::Fair,
            status: EquipmentStatus::Available,
            description: None,
        });

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(store.equipment().len(), 1);
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique_under_rapid_creation() {
        let mut store = empty_store();
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| store.next_id("n")).collect();
        assert_eq!(ids.len(), 1000);
    }
}
