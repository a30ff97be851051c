//! Maintenance record model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::enums::MaintenanceType;

/// Maintenance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: String,
    pub equipment_id: String,
    pub equipment_name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub notes: String,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
}

/// A fully resolved maintenance record ready to be stored
#[derive(Debug, Clone)]
pub struct NewMaintenance {
    pub equipment_id: String,
    pub equipment_name: String,
    pub date: NaiveDate,
    pub kind: MaintenanceType,
    pub notes: String,
    pub cost: Option<Decimal>,
}

/// Create maintenance request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    #[validate(length(min = 1, message = "Equipment is required"))]
    pub equipment_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    #[validate(custom(function = "validate_notes"))]
    pub notes: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "validate_cost"))]
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
}

/// Update maintenance request; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenance {
    pub equipment_id: Option<String>,
    pub equipment_name: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceType>,
    #[validate(custom(function = "validate_notes"))]
    pub notes: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "validate_cost"))]
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
}

/// Maintenance list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MaintenanceQuery {
    /// Case-insensitive match on equipment name or notes
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceType>,
}

fn validate_notes(notes: &str) -> Result<(), ValidationError> {
    if notes.trim().is_empty() {
        let mut error = ValidationError::new("notes");
        error.message = Some("Notes are required".into());
        return Err(error);
    }
    Ok(())
}

fn validate_cost(cost: &Decimal) -> Result<(), ValidationError> {
    if cost.is_sign_negative() {
        let mut error = ValidationError::new("cost");
        error.message = Some("Cost cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

impl Maintenance {
    pub fn from_new(id: String, data: NewMaintenance) -> Self {
        Self {
            id,
            equipment_id: data.equipment_id,
            equipment_name: data.equipment_name,
            date: data.date,
            kind: data.kind,
            notes: data.notes,
            cost: data.cost,
        }
    }

    pub fn apply(&mut self, data: UpdateMaintenance) {
        if let Some(equipment_id) = data.equipment_id {
            self.equipment_id = equipment_id;
        }
        if let Some(equipment_name) = data.equipment_name {
            self.equipment_name = equipment_name;
        }
        if let Some(date) = data.date {
            self.date = date;
        }
        if let Some(kind) = data.kind {
            self.kind = kind;
        }
        if let Some(notes) = data.notes {
            self.notes = notes;
        }
        if data.cost.is_some() {
            self.cost = data.cost;
        }
    }

    pub fn matches(&self, query: &MaintenanceQuery) -> bool {
        let search = query.search.as_deref().map(str::to_lowercase);
        let matches_search = search.map_or(true, |term| {
            self.equipment_name.to_lowercase().contains(&term)
                || self.notes.to_lowercase().contains(&term)
        });
        matches_search && query.kind.map_or(true, |k| self.kind == k)
    }
}
