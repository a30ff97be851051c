//! Data models for Rentaldesk

pub mod enums;
pub mod equipment;
pub mod feedback;
pub mod maintenance;
pub mod notification;
pub mod rental;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use enums::{
    EquipmentCondition, EquipmentStatus, MaintenanceType, NotificationKind, RentalStatus, Role,
    Theme,
};
pub use equipment::Equipment;
pub use feedback::Feedback;
pub use maintenance::Maintenance;
pub use notification::Notification;
pub use rental::{Rental, RentalView};
pub use user::UserSession;
