use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;
use whenmeet_core::{
    aggregate::ColorClass,
    models::event::{Event, EventDetailsResponse},
};

use crate::test_utils::{create_event, test_server, unconfigured_server};

#[tokio::test]
async fn test_create_event_returns_grid() {
    let server = test_server();

    let response = server
        .post("/api/events")
        .json(&json!({
            "title": "Offsite",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let details = response.json::<EventDetailsResponse>();
    assert_eq!(details.event.title, "Offsite");
    assert_eq!(details.event.description, None);
    // Default window is 09:00-17:00
    assert_eq!(details.slots.len(), 3 * 16);
    assert_eq!(details.dates.len(), 3);
    assert_eq!(details.times.len(), 16);
    assert!(details.participants.is_empty());
    assert!(details.slots.iter().all(|s| s.color_class == ColorClass::None));
}

#[tokio::test]
async fn test_create_event_validation() {
    let server = test_server();

    let response = server
        .post("/api/events")
        .json(&json!({
            "title": "",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("title and date range"));

    server
        .post("/api/events")
        .json(&json!({
            "title": "Offsite",
            "start_date": "June 3rd",
            "end_date": "2024-06-05"
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let events = server.get("/api/events").await.json::<Vec<Event>>();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_list_events_newest_first() {
    let server = test_server();

    let first = create_event(&server, "First").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_event(&server, "Second").await;

    let events = server.get("/api/events").await.json::<Vec<Event>>();
    let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.event.id, first.event.id]);
}

#[tokio::test]
async fn test_get_event() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;

    let response = server.get(&format!("/api/events/{}", created.event.id)).await;

    response.assert_status_ok();
    let details = response.json::<EventDetailsResponse>();
    assert_eq!(details.event, created.event);
    assert_eq!(details.slots.len(), 8);
    assert_eq!(details.event.description.as_deref(), Some("Quarterly planning"));
}

#[tokio::test]
async fn test_get_unknown_event() {
    let server = test_server();

    server
        .get(&format!("/api/events/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unconfigured_server_degrades() {
    let server = unconfigured_server();

    let events = server.get("/api/events").await.json::<Vec<Event>>();
    assert!(events.is_empty());

    server
        .post("/api/events")
        .json(&json!({
            "title": "Offsite",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        }))
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "degraded");
    assert_eq!(health["store_configured"], false);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server();

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "ok");

    let version = server.get("/version").await.json::<Value>();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
