//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, equipment, feedback, health, maintenance, notifications, rentals, reports, settings,
    stats,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rentaldesk API",
        version = "1.0.0",
        description = "Equipment Rental Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Rentals
        rentals::list_rentals,
        rentals::get_rental,
        rentals::create_rental,
        rentals::update_rental,
        rentals::update_rental_status,
        rentals::rental_calendar,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::get_maintenance,
        maintenance::create_maintenance,
        maintenance::update_maintenance,
        // Notifications
        notifications::list_notifications,
        notifications::unread_count,
        notifications::mark_read,
        // Stats and reports
        stats::get_dashboard,
        stats::get_report_summary,
        reports::export_report,
        // Feedback
        feedback::submit_feedback,
        feedback::list_feedback,
        // Settings
        settings::get_theme,
        settings::update_theme,
    ),
    components(
        schemas(
            // Enums
            crate::models::EquipmentCondition,
            crate::models::EquipmentStatus,
            crate::models::RentalStatus,
            crate::models::MaintenanceType,
            crate::models::NotificationKind,
            crate::models::Role,
            crate::models::Theme,
            // Auth
            crate::models::user::UserSession,
            crate::models::user::LoginRequest,
            crate::models::user::SessionResponse,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::EquipmentDetails,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalView,
            crate::models::rental::CreateRental,
            crate::models::rental::UpdateRental,
            crate::models::rental::UpdateRentalStatus,
            // Maintenance
            crate::models::maintenance::Maintenance,
            crate::models::maintenance::CreateMaintenance,
            crate::models::maintenance::UpdateMaintenance,
            // Notifications
            crate::models::notification::Notification,
            crate::models::notification::NotificationFeed,
            notifications::UnreadCountResponse,
            // Stats and reports
            crate::models::report::DashboardKpis,
            crate::models::report::DashboardResponse,
            crate::models::report::ReportSummary,
            crate::models::report::StatEntry,
            crate::models::report::AmountEntry,
            crate::models::report::RevenueEntry,
            crate::models::report::CalendarDay,
            crate::models::report::CalendarEntry,
            crate::models::report::ExportKind,
            // Feedback
            crate::models::feedback::Feedback,
            crate::models::feedback::CreateFeedback,
            crate::models::feedback::FeedbackSummary,
            // Settings
            settings::ThemeSettings,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Session endpoints"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "rentals", description = "Rental bookings and calendar"),
        (name = "maintenance", description = "Maintenance records"),
        (name = "notifications", description = "Activity notifications"),
        (name = "stats", description = "Dashboard and report figures"),
        (name = "reports", description = "Report export"),
        (name = "feedback", description = "Customer feedback"),
        (name = "settings", description = "Preferences")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
