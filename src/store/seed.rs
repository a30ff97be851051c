//! Demo fixtures used when a collection has never been persisted

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Equipment, EquipmentCondition, EquipmentStatus, Maintenance, MaintenanceType, Rental,
    RentalStatus,
};

/// What to start from when nothing has been persisted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Small demo inventory with two rentals and two maintenance records
    Demo,
    /// Empty collections
    Empty,
}

#[derive(Debug, Default)]
pub struct Fixtures {
    pub equipment: Vec<Equipment>,
    pub rentals: Vec<Rental>,
    pub maintenance: Vec<Maintenance>,
}

impl Seed {
    pub fn fixtures(self) -> Fixtures {
        match self {
            Seed::Demo => demo(),
            Seed::Empty => Fixtures::default(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn equipment(
    id: &str,
    name: &str,
    category: &str,
    condition: EquipmentCondition,
    status: EquipmentStatus,
    description: &str,
) -> Equipment {
    Equipment {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        condition,
        status,
        description: Some(description.into()),
    }
}

fn demo() -> Fixtures {
    use EquipmentCondition::*;

    let equipment = vec![
        equipment("eq1", "Excavator", "Heavy Machinery", Good, EquipmentStatus::Available,
            "Large hydraulic excavator for construction projects"),
        equipment("eq2", "Concrete Mixer", "Construction", Excellent, EquipmentStatus::Rented,
            "Professional concrete mixer for large projects"),
        equipment("eq3", "Bulldozer", "Heavy Machinery", Good, EquipmentStatus::Available,
            "Heavy-duty bulldozer for earthmoving"),
        equipment("eq4", "Crane", "Heavy Machinery", Excellent, EquipmentStatus::Available,
            "Mobile crane for lifting operations"),
        equipment("eq5", "Generator", "Power Equipment", Good, EquipmentStatus::Maintenance,
            "Portable diesel generator"),
    ];

    let rentals = vec![
        Rental {
            id: "r1".into(),
            equipment_id: "eq2".into(),
            customer_id: "3".into(),
            customer_name: "Customer User".into(),
            equipment_name: "Concrete Mixer".into(),
            start_date: date(2025, 6, 1),
            end_date: date(2025, 6, 5),
            status: RentalStatus::Reserved,
            total_cost: Some(Decimal::from(500)),
        },
        Rental {
            id: "r2".into(),
            equipment_id: "eq1".into(),
            customer_id: "3".into(),
            customer_name: "Customer User".into(),
            equipment_name: "Excavator".into(),
            start_date: date(2025, 5, 25),
            end_date: date(2025, 5, 30),
            status: RentalStatus::Overdue,
            total_cost: Some(Decimal::from(1200)),
        },
    ];

    let maintenance = vec![
        Maintenance {
            id: "m1".into(),
            equipment_id: "eq1".into(),
            equipment_name: "Excavator".into(),
            date: date(2025, 5, 20),
            kind: MaintenanceType::RoutineCheck,
            notes: "No issues found".into(),
            cost: Some(Decimal::from(150)),
        },
        Maintenance {
            id: "m2".into(),
            equipment_id: "eq5".into(),
            equipment_name: "Generator".into(),
            date: date(2025, 5, 28),
            kind: MaintenanceType::Repair,
            notes: "Replaced air filter and spark plugs".into(),
            cost: Some(Decimal::from(85)),
        },
    ];

    Fixtures {
        equipment,
        rentals,
        maintenance,
    }
}
