//! Equipment model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{EquipmentCondition, EquipmentStatus};
use super::maintenance::Maintenance;
use super::rental::RentalView;

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: String,
    pub condition: EquipmentCondition,
    pub status: EquipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub condition: EquipmentCondition,
    pub status: EquipmentStatus,
    pub description: Option<String>,
}

/// Update equipment request; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub condition: Option<EquipmentCondition>,
    pub status: Option<EquipmentStatus>,
    pub description: Option<String>,
}

/// Equipment list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    pub status: Option<EquipmentStatus>,
    pub category: Option<String>,
}

/// Equipment with its rental and maintenance history
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDetails {
    pub equipment: Equipment,
    pub rentals: Vec<RentalView>,
    pub maintenance: Vec<Maintenance>,
}

impl Equipment {
    /// Build a record from a create request and a freshly generated id
    pub fn from_create(id: String, data: CreateEquipment) -> Self {
        Self {
            id,
            name: data.name,
            category: data.category,
            condition: data.condition,
            status: data.status,
            description: data.description,
        }
    }

    /// Merge the present fields of `data` over this record
    pub fn apply(&mut self, data: UpdateEquipment) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(category) = data.category {
            self.category = category;
        }
        if let Some(condition) = data.condition {
            self.condition = condition;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if data.description.is_some() {
            self.description = data.description;
        }
    }

    pub fn matches(&self, query: &EquipmentQuery) -> bool {
        query.status.map_or(true, |s| self.status == s)
            && query
                .category
                .as_deref()
                .map_or(true, |c| self.category.eq_ignore_ascii_case(c))
    }
}
