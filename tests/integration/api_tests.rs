//! API integration tests
//!
//! Each test drives the full router in-process against in-memory storage
//! seeded with the demo inventory.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use rentaldesk_server::{
    config::{AppConfig, StorageBackend},
    create_router, AppState,
};

fn app() -> Router {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let state = AppState::open(config).expect("Failed to open state");
    create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(format!("/api/v1{}", uri));
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn login(app: &Router, email: &str, password: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_requests_require_a_session() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/equipment", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NotAuthorized");

    let (status, body) = send(&app, Method::GET, "/auth/me", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAuthenticated"], false);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "admin@entnt.in", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_malformed_email_is_unauthorized() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "admin", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NotAuthorized");
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    let (_, body) = send(&app, Method::GET, "/auth/me", None).await;
    assert_eq!(body["isAuthenticated"], true);
    assert_eq!(body["user"]["role"], "Admin");

    let (status, _) = send(&app, Method::POST, "/auth/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_equipment_lifecycle() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/equipment",
        Some(json!({
            "name": "Scissor Lift",
            "category": "Access",
            "condition": "Good",
            "status": "Available"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("eq"));

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/equipment/{}", id),
        Some(json!({ "condition": "Fair" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["condition"], "Fair");
    assert_eq!(updated["name"], "Scissor Lift");

    let (status, _) = send(&app, Method::DELETE, &format!("/equipment/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &format!("/equipment/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, feed) = send(&app, Method::GET, "/notifications", None).await;
    assert_eq!(feed["unreadCount"], 2);
    assert_eq!(feed["unread"][0]["message"], "Equipment \"Scissor Lift\" removed from inventory");
    assert_eq!(feed["unread"][1]["message"], "New equipment \"Scissor Lift\" added to inventory");
}

#[tokio::test]
async fn test_equipment_writes_are_admin_only() {
    let app = app();
    login(&app, "staff@entnt.in", "staff123").await;

    let (status, _) = send(&app, Method::DELETE, "/equipment/eq1", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, list) = send(&app, Method::GET, "/equipment", None).await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_invalid_equipment_is_rejected() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/equipment",
        Some(json!({
            "name": "",
            "category": "Access",
            "condition": "Good",
            "status": "Available"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_returning_a_rental_notifies() {
    let app = app();
    login(&app, "staff@entnt.in", "staff123").await;

    let (status, rental) = send(
        &app,
        Method::PUT,
        "/rentals/r1/status",
        Some(json!({ "status": "Returned" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rental["status"], "Returned");

    let (_, feed) = send(&app, Method::GET, "/notifications", None).await;
    assert_eq!(feed["unread"][0]["message"], "Concrete Mixer has been returned");
    assert_eq!(feed["unread"][0]["type"], "success");

    let id = feed["unread"][0]["id"].as_str().unwrap().to_string();
    let (status, _) = send(&app, Method::PUT, &format!("/notifications/{}/read", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, count) = send(&app, Method::GET, "/notifications/unread-count", None).await;
    assert_eq!(count["unreadCount"], 0);
}

#[tokio::test]
async fn test_customer_books_in_own_name() {
    let app = app();
    login(&app, "customer@entnt.in", "cust123").await;

    let (status, rental) = send(
        &app,
        Method::POST,
        "/rentals",
        Some(json!({
            "equipmentId": "eq3",
            "customerName": "Someone Else",
            "startDate": "2030-01-10",
            "endDate": "2030-01-12"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rental["customerName"], "Customer User");
    assert_eq!(rental["equipmentName"], "Bulldozer");
    assert_eq!(rental["status"], "Reserved");
    assert_eq!(rental["totalCost"], 200.0);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/rentals/r1/status",
        Some(json!({ "status": "Rented" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_customer_rental_always_starts_reserved() {
    let app = app();
    login(&app, "customer@entnt.in", "cust123").await;

    let (status, rental) = send(
        &app,
        Method::POST,
        "/rentals",
        Some(json!({
            "equipmentId": "eq1",
            "status": "Returned",
            "startDate": "2030-02-01",
            "endDate": "2030-02-03"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rental["status"], "Reserved");
}

#[tokio::test]
async fn test_unavailable_equipment_cannot_be_rented() {
    let app = app();
    login(&app, "customer@entnt.in", "cust123").await;

    for equipment_id in ["eq2", "eq5"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/rentals",
            Some(json!({
                "equipmentId": equipment_id,
                "startDate": "2030-02-01",
                "endDate": "2030-02-03"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadValue");
    }

    let (_, rentals) = send(&app, Method::GET, "/rentals", None).await;
    assert_eq!(rentals.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_rental_period_must_be_positive() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/rentals",
        Some(json!({ "equipmentId": "eq3", "startDate": "2030-01-10", "endDate": "2030-01-10" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_reaches_rentals_and_maintenance() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/equipment/eq1",
        Some(json!({ "name": "Excavator XL" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, rental) = send(&app, Method::GET, "/rentals/r2", None).await;
    assert_eq!(rental["equipmentName"], "Excavator XL");
    let (_, record) = send(&app, Method::GET, "/maintenance/m1", None).await;
    assert_eq!(record["equipmentName"], "Excavator XL");
}

#[tokio::test]
async fn test_dashboard_kpis() {
    let app = app();
    login(&app, "customer@entnt.in", "cust123").await;

    let (status, body) = send(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["totalEquipment"], 5);
    assert_eq!(body["kpis"]["availableEquipment"], 3);
    assert_eq!(body["kpis"]["overdueRentals"], 1);
    assert_eq!(body["overdueRentals"][0]["id"], "r2");
    assert_eq!(body["availableEquipment"].as_array().unwrap().len(), 3);
    assert!(body["recentNotifications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_shows_latest_activity_first() {
    let app = app();
    login(&app, "admin@entnt.in", "admin123").await;

    for name in ["Scissor Lift", "Forklift"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/equipment",
            Some(json!({
                "name": name,
                "category": "Access",
                "condition": "Good",
                "status": "Available"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/dashboard", None).await;
    let recent = body["recentNotifications"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["message"], "New equipment \"Forklift\" added to inventory");
    assert_eq!(recent[1]["message"], "New equipment \"Scissor Lift\" added to inventory");
    assert_eq!(body["unreadNotifications"], 2);
}

#[tokio::test]
async fn test_reports_are_role_gated() {
    let app = app();
    login(&app, "staff@entnt.in", "staff123").await;

    let (status, _) = send(&app, Method::GET, "/reports/summary", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/reports/export?kind=maintenance")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("Report-maintenance-"));
    let html = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(html.to_vec()).unwrap();
    assert!(html.contains("Maintenance Costs by Type"));
    assert!(html.contains("Exported by: Staff Member (Staff)"));

    login(&app, "admin@entnt.in", "admin123").await;
    let (status, summary) = send(&app, Method::GET, "/reports/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalRevenue"], 1700.0);
    assert_eq!(summary["totalMaintenanceCost"], 235.0);
    assert_eq!(summary["averageRentalValue"], 850.0);
    assert_eq!(summary["reservedRentals"], 1);
    assert_eq!(summary["returnedRentals"], 0);
}

#[tokio::test]
async fn test_feedback_flow() {
    let app = app();
    login(&app, "customer@entnt.in", "cust123").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/feedback",
        Some(json!({ "equipmentId": "eq4", "rating": 4, "comment": "Smooth lifts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, Method::GET, "/feedback", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    login(&app, "staff@entnt.in", "staff123").await;
    let (status, summary) = send(&app, Method::GET, "/feedback", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total"], 1);
    assert_eq!(summary["averageRating"], 4.0);
    assert_eq!(summary["positivePercent"], 100);
    assert_eq!(summary["feedback"][0]["equipmentName"], "Crane");
}

#[tokio::test]
async fn test_theme_preference() {
    let app = app();
    let (_, body) = send(&app, Method::GET, "/settings/theme", None).await;
    assert_eq!(body["theme"], "light");

    let (status, body) =
        send(&app, Method::PUT, "/settings/theme", Some(json!({ "theme": "dark" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "dark");
}
