//! Shared domain enums
//!
//! Every enum serializes to the exact label stored in the persisted
//! collections (e.g. `"Routine Check"`, `"info"`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Physical condition of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl EquipmentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCondition::Excellent => "Excellent",
            EquipmentCondition::Good => "Good",
            EquipmentCondition::Fair => "Fair",
            EquipmentCondition::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for EquipmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Availability of a piece of equipment.
///
/// Advisory only: nothing ties `Rented` to an active rental or
/// `Maintenance` to an open maintenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Rented => "Rented",
            EquipmentStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RentalStatus
// ---------------------------------------------------------------------------

/// Stored rental status. `Overdue` is only ever set explicitly; see
/// [`crate::services::stats::is_overdue`] for the computed predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RentalStatus {
    Reserved,
    Rented,
    Returned,
    Overdue,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Reserved => "Reserved",
            RentalStatus::Rented => "Rented",
            RentalStatus::Returned => "Returned",
            RentalStatus::Overdue => "Overdue",
        }
    }

    /// Reserved or currently out
    pub fn is_active(&self) -> bool {
        matches!(self, RentalStatus::Reserved | RentalStatus::Rented)
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceType {
    #[serde(rename = "Routine Check")]
    RoutineCheck,
    Repair,
    Overhaul,
    Emergency,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::RoutineCheck => "Routine Check",
            MaintenanceType::Repair => "Repair",
            MaintenanceType::Overhaul => "Overhaul",
            MaintenanceType::Emergency => "Emergency",
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Session role. Gates what the API lets the current user do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// UI colour scheme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_type_uses_display_label_on_the_wire() {
        let json = serde_json::to_string(&MaintenanceType::RoutineCheck).unwrap();
        assert_eq!(json, "\"Routine Check\"");
        let parsed: MaintenanceType = serde_json::from_str("\"Routine Check\"").unwrap();
        assert_eq!(parsed, MaintenanceType::RoutineCheck);
    }

    #[test]
    fn test_notification_kind_is_lowercase() {
        assert_eq!(serde_json::to_string(&NotificationKind::Success).unwrap(), "\"success\"");
    }

    #[test]
    fn test_active_rental_statuses() {
        assert!(RentalStatus::Reserved.is_active());
        assert!(RentalStatus::Rented.is_active());
        assert!(!RentalStatus::Returned.is_active());
        assert!(!RentalStatus::Overdue.is_active());
    }
}
