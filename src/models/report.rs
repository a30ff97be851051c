//! Dashboard and report view types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::equipment::Equipment;
use super::notification::Notification;
use super::rental::{Rental, RentalView};

/// Dashboard key figures
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_equipment: usize,
    pub available_equipment: usize,
    pub rented_equipment: usize,
    pub maintenance_equipment: usize,
    /// Reserved plus Rented
    pub active_rentals: usize,
    pub reserved_rentals: usize,
    pub rented_rentals: usize,
    /// Rentals whose stored status is `Overdue`
    pub overdue_rentals: usize,
    /// Rentals past their end date and not returned, whatever their stored status
    pub computed_overdue_rentals: usize,
    /// Maintenance dated within the next 7 days, today included
    pub upcoming_maintenance: usize,
}

/// Count per label
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// Money amount per label
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AmountEntry {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub amount: Decimal,
}

/// Revenue of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RevenueEntry {
    /// Short label, e.g. `Jun 2025`
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub revenue: Decimal,
}

/// Dashboard payload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub kpis: DashboardKpis,
    /// Rentals with a stored `Overdue` status
    pub overdue_rentals: Vec<Rental>,
    /// First five available pieces of equipment
    pub available_equipment: Vec<Equipment>,
    pub unread_notifications: usize,
    /// Five newest notifications, newest first
    pub recent_notifications: Vec<Notification>,
}

/// Aggregates backing the reports page
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub rental_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_maintenance_cost: Decimal,
    /// Revenue minus maintenance cost
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub net_revenue: Decimal,
    pub maintenance_count: usize,
    /// Total revenue per rental, two decimals, 0 without rentals
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub average_rental_value: Decimal,
    pub reserved_rentals: usize,
    /// Rentals with stored status `Rented`
    pub rented_rentals: usize,
    pub returned_rentals: usize,
    pub computed_overdue_rentals: usize,
    /// Percentage of equipment currently rented
    pub utilization_rate: f64,
    pub equipment_by_condition: Vec<StatEntry>,
    pub equipment_by_category: Vec<StatEntry>,
    pub equipment_by_status: Vec<StatEntry>,
    pub revenue_by_month: Vec<RevenueEntry>,
    pub maintenance_cost_by_type: Vec<AmountEntry>,
}

/// Rentals occupying a given day
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub rentals: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    #[serde(flatten)]
    pub rental: RentalView,
    pub starts_today: bool,
    pub ends_today: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// Day to inspect (YYYY-MM-DD), today when absent
    pub date: Option<NaiveDate>,
}

/// Sections included in an exported report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Equipment,
    Revenue,
    Maintenance,
    #[default]
    All,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Equipment => "equipment",
            ExportKind::Revenue => "revenue",
            ExportKind::Maintenance => "maintenance",
            ExportKind::All => "all",
        }
    }

    pub fn includes(&self, section: ExportKind) -> bool {
        *self == ExportKind::All || *self == section
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    #[serde(default)]
    pub kind: ExportKind,
}
