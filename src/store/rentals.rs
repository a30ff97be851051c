//! Rental mutations on DataStore

use super::DataStore;
use crate::{
    error::AppResult,
    models::{
        rental::{NewRental, Rental, UpdateRental},
        NotificationKind, RentalStatus,
    },
    repository::keys,
};

impl DataStore {
    /// Append a new rental and announce it
    pub fn add_rental(&mut self, data: NewRental) -> AppResult<Rental> {
        let id = self.next_id("r");
        let rental = Rental::from_new(id, data);
        self.rentals.push(rental.clone());
        self.repository.save(keys::RENTALS, &self.rentals)?;

        tracing::info!(
            id = %rental.id,
            equipment_id = %rental.equipment_id,
            customer_id = %rental.customer_id,
            "Rental created"
        );
        self.notify(
            NotificationKind::Success,
            format!("New rental created for {}", rental.equipment_name),
        )?;
        Ok(rental)
    }

    /// Merge `data` over an existing rental.
    ///
    /// Setting the status to `Returned` emits a success notification naming
    /// the equipment as it was recorded before this update. Moving the rental
    /// to another piece of equipment without naming it resolves the name
    /// from the inventory.
    pub fn update_rental(&mut self, id: &str, mut data: UpdateRental) -> AppResult<Rental> {
        if data.equipment_name.is_none() {
            if let Some(equipment_id) = data.equipment_id.as_deref() {
                data.equipment_name = self.find_equipment(equipment_id).map(|eq| eq.name.clone());
            }
        }
        let returned = data.status == Some(RentalStatus::Returned);

        let rental = self
            .rentals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("Rental", id))?;

        let previous_equipment_name = rental.equipment_name.clone();
        rental.apply(data);
        let updated = rental.clone();
        self.repository.save(keys::RENTALS, &self.rentals)?;

        tracing::info!(id, status = %updated.status, "Rental updated");
        if returned {
            self.notify(
                NotificationKind::Success,
                format!("{} has been returned", previous_equipment_name),
            )?;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::super::tests::empty_store;
    use super::super::{DataStore, Seed};
    use crate::{
        error::AppError,
        models::{
            rental::{NewRental, UpdateRental},
            NotificationKind, Rental, RentalStatus,
        },
        repository::{keys, Repository},
    };

    fn new_rental() -> NewRental {
        NewRental {
            equipment_id: "eq4".into(),
            customer_id: "3".into(),
            customer_name: "Customer User".into(),
            equipment_name: "Crane".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            status: RentalStatus::Reserved,
            total_cost: Some(Decimal::from(300)),
        }
    }

    fn status(status: RentalStatus) -> UpdateRental {
        UpdateRental {
            status: Some(status),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_rental_notifies() {
        let mut store = empty_store();
        let rental = store.add_rental(new_rental()).unwrap();

        assert!(rental.id.starts_with('r'));
        assert_eq!(store.rentals().len(), 1);
        assert_eq!(store.notifications()[0].message, "New rental created for Crane");
        assert_eq!(store.notifications()[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_return_emits_exactly_one_success_notification() {
        let mut store = empty_store();
        let rental = store.add_rental(new_rental()).unwrap();
        let before = store.notifications().len();

        store.update_rental(&rental.id, status(RentalStatus::Returned)).unwrap();

        assert_eq!(store.notifications().len(), before + 1);
        let notification = &store.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Crane has been returned");
    }

    #[test]
    fn test_other_status_changes_emit_nothing() {
        let mut store = empty_store();
        let rental = store.add_rental(new_rental()).unwrap();
        let before = store.notifications().len();

        for next in [RentalStatus::Rented, RentalStatus::Overdue, RentalStatus::Reserved] {
            store.update_rental(&rental.id, status(next)).unwrap();
        }
        assert_eq!(store.notifications().len(), before);
        assert_eq!(store.find_rental(&rental.id).unwrap().status, RentalStatus::Reserved);
    }

    #[test]
    fn test_return_names_equipment_from_before_the_update() {
        let mut store = empty_store();
        let rental = store.add_rental(new_rental()).unwrap();

        store
            .update_rental(
                &rental.id,
                UpdateRental {
                    status: Some(RentalStatus::Returned),
                    equipment_name: Some("Tower Crane".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.notifications()[0].message, "Crane has been returned");
        assert_eq!(store.find_rental(&rental.id).unwrap().equipment_name, "Tower Crane");
    }

    #[test]
    fn test_update_unknown_rental_changes_nothing() {
        let mut store = DataStore::open(Repository::in_memory(), Seed::Demo).unwrap();
        let rentals = store.rentals().to_vec();

        let result = store.update_rental("r404", status(RentalStatus::Returned));

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.rentals(), rentals.as_slice());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_changing_equipment_resolves_its_name() {
        let repository = Repository::in_memory();
        let mut store = DataStore::open(repository.clone(), Seed::Demo).unwrap();

        let updated = store
            .update_rental(
                "r1",
                UpdateRental {
                    equipment_id: Some("eq3".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.equipment_name, "Bulldozer");
        let persisted: Vec<Rental> = repository.load(keys::RENTALS).unwrap().unwrap();
        assert_eq!(persisted, store.rentals());
    }
}
