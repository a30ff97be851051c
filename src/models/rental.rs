//! Rental model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::enums::RentalStatus;

/// Rental record.
///
/// `equipment_name` is a snapshot of the equipment name; the store rewrites
/// it when the referenced equipment is renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub equipment_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub equipment_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub total_cost: Option<Decimal>,
}

/// A fully resolved rental ready to be stored (everything but the id)
#[derive(Debug, Clone)]
pub struct NewRental {
    pub equipment_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub equipment_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    pub total_cost: Option<Decimal>,
}

/// Create rental request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_rental_period"))]
pub struct CreateRental {
    #[validate(length(min = 1, message = "Equipment is required"))]
    pub equipment_id: String,
    /// Defaults to the current user
    pub customer_id: Option<String>,
    /// Defaults to the current user's name
    pub customer_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to `Reserved`
    pub status: Option<RentalStatus>,
    /// Defaults to rental days times the configured daily rate
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total_cost: Option<Decimal>,
}

/// Update rental request; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRental {
    #[validate(length(min = 1, message = "Equipment cannot be empty"))]
    pub equipment_id: Option<String>,
    pub customer_id: Option<String>,
    #[validate(length(min = 1, message = "Customer name cannot be empty"))]
    pub customer_name: Option<String>,
    pub equipment_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<RentalStatus>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total_cost: Option<Decimal>,
}

/// Status-only change (staff workflow)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRentalStatus {
    pub status: RentalStatus,
}

/// Rental list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RentalQuery {
    /// Case-insensitive match on customer or equipment name
    pub search: Option<String>,
    pub status: Option<RentalStatus>,
}

/// Rental as listed: the stored status alongside the computed overdue flag
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalView {
    #[serde(flatten)]
    pub rental: Rental,
    pub is_overdue: bool,
}

fn validate_rental_period(data: &CreateRental) -> Result<(), ValidationError> {
    if data.end_date <= data.start_date {
        let mut error = ValidationError::new("rental_period");
        error.message = Some("End date must be after start date".into());
        return Err(error);
    }
    Ok(())
}

impl Rental {
    pub fn from_new(id: String, data: NewRental) -> Self {
        Self {
            id,
            equipment_id: data.equipment_id,
            customer_id: data.customer_id,
            customer_name: data.customer_name,
            equipment_name: data.equipment_name,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            total_cost: data.total_cost,
        }
    }

    /// Merge the present fields of `data` over this record
    pub fn apply(&mut self, data: UpdateRental) {
        if let Some(equipment_id) = data.equipment_id {
            self.equipment_id = equipment_id;
        }
        if let Some(customer_id) = data.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(customer_name) = data.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(equipment_name) = data.equipment_name {
            self.equipment_name = equipment_name;
        }
        if let Some(start_date) = data.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = data.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if data.total_cost.is_some() {
            self.total_cost = data.total_cost;
        }
    }

    pub fn matches(&self, query: &RentalQuery) -> bool {
        let search = query.search.as_deref().map(str::to_lowercase);
        let matches_search = search.map_or(true, |term| {
            self.customer_name.to_lowercase().contains(&term)
                || self.equipment_name.to_lowercase().contains(&term)
        });
        matches_search && query.status.map_or(true, |s| self.status == s)
    }

    /// Rental days between start and end, never negative
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0)
    }
}
