//! Derived views: dashboard KPIs, report aggregates and calendar occupancy
//!
//! The free functions here are pure. They read the collections they are
//! given plus an explicit clock value and are recomputed on every call.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::{
        report::{
            AmountEntry, CalendarDay, CalendarEntry, DashboardKpis, DashboardResponse,
            ReportSummary, RevenueEntry, StatEntry,
        },
        Equipment, EquipmentStatus, Maintenance, Rental, RentalStatus, RentalView,
    },
    services::SharedStore,
};

/// Months covered by the revenue series, current month included
pub const REVENUE_MONTHS: u32 = 6;
/// Days ahead counted as upcoming maintenance, today included
pub const UPCOMING_MAINTENANCE_DAYS: u64 = 7;
/// Notifications shown as recent activity on the dashboard
pub const RECENT_ACTIVITY: usize = 5;
/// Available equipment listed on the dashboard
pub const DASHBOARD_AVAILABLE: usize = 5;

/// Past its end date and not returned, regardless of the stored status.
///
/// The end date is taken as midnight UTC, so a rental is overdue from the
/// first instant of its end date onwards.
pub fn is_overdue(rental: &Rental, now: DateTime<Utc>) -> bool {
    rental.status != RentalStatus::Returned
        && rental.end_date.and_time(NaiveTime::MIN).and_utc() < now
}

pub fn rental_view(rental: &Rental, now: DateTime<Utc>) -> RentalView {
    RentalView {
        rental: rental.clone(),
        is_overdue: is_overdue(rental, now),
    }
}

pub fn kpis(
    equipment: &[Equipment],
    rentals: &[Rental],
    maintenance: &[Maintenance],
    now: DateTime<Utc>,
) -> DashboardKpis {
    let today = now.date_naive();
    let horizon = today
        .checked_add_days(Days::new(UPCOMING_MAINTENANCE_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let equipment_with =
        |status: EquipmentStatus| equipment.iter().filter(|eq| eq.status == status).count();
    let rentals_with = |status: RentalStatus| count_rentals(rentals, status);

    DashboardKpis {
        total_equipment: equipment.len(),
        available_equipment: equipment_with(EquipmentStatus::Available),
        rented_equipment: equipment_with(EquipmentStatus::Rented),
        maintenance_equipment: equipment_with(EquipmentStatus::Maintenance),
        active_rentals: rentals.iter().filter(|r| r.status.is_active()).count(),
        reserved_rentals: rentals_with(RentalStatus::Reserved),
        rented_rentals: rentals_with(RentalStatus::Rented),
        overdue_rentals: rentals_with(RentalStatus::Overdue),
        computed_overdue_rentals: rentals.iter().filter(|r| is_overdue(r, now)).count(),
        upcoming_maintenance: maintenance
            .iter()
            .filter(|m| m.date >= today && m.date <= horizon)
            .count(),
    }
}

fn count_rentals(rentals: &[Rental], status: RentalStatus) -> usize {
    rentals.iter().filter(|r| r.status == status).count()
}

/// Revenue per calendar month for the trailing [`REVENUE_MONTHS`] months,
/// oldest first. A rental counts toward the month of its start date.
pub fn revenue_by_month(rentals: &[Rental], today: NaiveDate) -> Vec<RevenueEntry> {
    let current = today.with_day(1).unwrap_or(today);

    (0..REVENUE_MONTHS)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(|month| {
            let revenue = rentals
                .iter()
                .filter(|r| {
                    r.start_date.year() == month.year() && r.start_date.month() == month.month()
                })
                .map(|r| r.total_cost.unwrap_or_default())
                .sum();
            RevenueEntry {
                month: month.format("%b %Y").to_string(),
                year: month.year(),
                month_number: month.month(),
                revenue,
            }
        })
        .collect()
}

/// Total maintenance cost per type, in order of first appearance
pub fn maintenance_cost_by_type(maintenance: &[Maintenance]) -> Vec<AmountEntry> {
    let mut totals: IndexMap<&'static str, Decimal> = IndexMap::new();
    for record in maintenance {
        *totals.entry(record.kind.as_str()).or_default() += record.cost.unwrap_or_default();
    }
    totals
        .into_iter()
        .map(|(label, amount)| AmountEntry {
            label: label.to_string(),
            amount,
        })
        .collect()
}

/// Count occurrences per label, in order of first appearance
fn count_by<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<StatEntry> {
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(label, value)| StatEntry {
            label: label.to_string(),
            value,
        })
        .collect()
}

pub fn equipment_by_category(equipment: &[Equipment]) -> Vec<StatEntry> {
    count_by(equipment.iter().map(|eq| eq.category.as_str()))
}

pub fn equipment_by_status(equipment: &[Equipment]) -> Vec<StatEntry> {
    count_by(equipment.iter().map(|eq| eq.status.as_str()))
}

pub fn equipment_by_condition(equipment: &[Equipment]) -> Vec<StatEntry> {
    count_by(equipment.iter().map(|eq| eq.condition.as_str()))
}

pub fn report_summary(
    equipment: &[Equipment],
    rentals: &[Rental],
    maintenance: &[Maintenance],
    now: DateTime<Utc>,
) -> ReportSummary {
    let total_revenue: Decimal = rentals.iter().map(|r| r.total_cost.unwrap_or_default()).sum();
    let total_maintenance_cost: Decimal =
        maintenance.iter().map(|m| m.cost.unwrap_or_default()).sum();

    let average_rental_value = if rentals.is_empty() {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(rentals.len())).round_dp(2)
    };

    let rented_equipment = equipment
        .iter()
        .filter(|eq| eq.status == EquipmentStatus::Rented)
        .count();
    let utilization_rate = if equipment.is_empty() {
        0.0
    } else {
        let rate = rented_equipment as f64 / equipment.len() as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    };

    ReportSummary {
        rental_count: rentals.len(),
        total_revenue,
        total_maintenance_cost,
        net_revenue: total_revenue - total_maintenance_cost,
        maintenance_count: maintenance.len(),
        average_rental_value,
        reserved_rentals: count_rentals(rentals, RentalStatus::Reserved),
        rented_rentals: count_rentals(rentals, RentalStatus::Rented),
        returned_rentals: count_rentals(rentals, RentalStatus::Returned),
        computed_overdue_rentals: rentals.iter().filter(|r| is_overdue(r, now)).count(),
        utilization_rate,
        equipment_by_condition: equipment_by_condition(equipment),
        equipment_by_category: equipment_by_category(equipment),
        equipment_by_status: equipment_by_status(equipment),
        revenue_by_month: revenue_by_month(rentals, now.date_naive()),
        maintenance_cost_by_type: maintenance_cost_by_type(maintenance),
    }
}

/// Rentals whose period covers `date`, both ends inclusive
pub fn rentals_on(rentals: &[Rental], date: NaiveDate) -> Vec<&Rental> {
    rentals
        .iter()
        .filter(|r| r.start_date <= date && date <= r.end_date)
        .collect()
}

pub fn calendar_day(rentals: &[Rental], date: NaiveDate, now: DateTime<Utc>) -> CalendarDay {
    let rentals = rentals_on(rentals, date)
        .into_iter()
        .map(|rental| CalendarEntry {
            starts_today: rental.start_date == date,
            ends_today: rental.end_date == date,
            rental: rental_view(rental, now),
        })
        .collect();
    CalendarDay { date, rentals }
}

/// Read-only derived views over the shared store
#[derive(Clone)]
pub struct StatsService {
    store: SharedStore,
}

impl StatsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn dashboard(&self, now: DateTime<Utc>) -> AppResult<DashboardResponse> {
        let store = self.store.read().await;
        Ok(DashboardResponse {
            kpis: kpis(store.equipment(), store.rentals(), store.maintenance(), now),
            overdue_rentals: store
                .rentals()
                .iter()
                .filter(|r| r.status == RentalStatus::Overdue)
                .cloned()
                .collect(),
            available_equipment: store
                .equipment()
                .iter()
                .filter(|eq| eq.status == EquipmentStatus::Available)
                .take(DASHBOARD_AVAILABLE)
                .cloned()
                .collect(),
            unread_notifications: store.unread_notifications(),
            recent_notifications: store
                .notifications()
                .iter()
                .take(RECENT_ACTIVITY)
                .cloned()
                .collect(),
        })
    }

    pub async fn summary(&self, now: DateTime<Utc>) -> AppResult<ReportSummary> {
        let store = self.store.read().await;
        Ok(report_summary(
            store.equipment(),
            store.rentals(),
            store.maintenance(),
            now,
        ))
    }

    pub async fn calendar(&self, date: NaiveDate, now: DateTime<Utc>) -> AppResult<CalendarDay> {
        let store = self.store.read().await;
        Ok(calendar_day(store.rentals(), date, now))
    }
}
