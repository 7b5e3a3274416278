use axum::http::StatusCode;
use fake::{Fake, faker::name::en::FirstName};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use whenmeet_core::{
    aggregate::ColorClass,
    models::{
        event::EventDetailsResponse,
        response::{SelectionResponse, SubmitAvailabilityResponse},
    },
};

use crate::test_utils::{create_event, test_server};

#[tokio::test]
async fn test_submit_then_read_selection() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;
    let mut unavailable: Vec<Uuid> = created.slots.iter().take(3).map(|s| s.id).collect();
    unavailable.sort();

    let response = server
        .put(&format!("/api/events/{}/responses", created.event.id))
        .json(&json!({
            "participant_name": "Ada Lovelace",
            "unavailable_slot_ids": unavailable
        }))
        .await;

    response.assert_status_ok();
    let saved = response.json::<SubmitAvailabilityResponse>();
    assert_eq!(saved.participant_name, "Ada Lovelace");
    assert_eq!(saved.unavailable_count, 3);
    assert_eq!(saved.available_count, 5);

    let selection = server
        .get(&format!(
            "/api/events/{}/participants/Ada%20Lovelace/selection",
            created.event.id
        ))
        .await
        .json::<SelectionResponse>();
    assert_eq!(selection.unavailable_slot_ids, unavailable);
}

#[tokio::test]
async fn test_heat_map_reflects_responses() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;
    let event_path = format!("/api/events/{}", created.event.id);
    let first_slot = created.slots[0].id;

    // Four participants, one of whom cannot make the first slot
    let names: Vec<String> = (0..4)
        .map(|i| format!("{} {}", FirstName().fake::<String>(), i))
        .collect();
    for (i, name) in names.iter().enumerate() {
        let unavailable: Vec<Uuid> = if i == 0 { vec![first_slot] } else { Vec::new() };
        server
            .put(&format!("{}/responses", event_path))
            .json(&json!({
                "participant_name": name,
                "unavailable_slot_ids": unavailable
            }))
            .await
            .assert_status_ok();
    }

    let details = server.get(&event_path).await.json::<EventDetailsResponse>();

    assert_eq!(details.participants.len(), 4);
    let first = details.slots.iter().find(|s| s.id == first_slot).unwrap();
    assert_eq!(first.available_count, 3);
    assert_eq!(first.color_class, ColorClass::High);
    assert!(!first.available_participants.contains(&names[0]));
    assert!(
        details
            .slots
            .iter()
            .filter(|s| s.id != first_slot)
            .all(|s| s.color_class == ColorClass::Full)
    );
}

#[tokio::test]
async fn test_resubmission_keeps_counts() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;
    let path = format!("/api/events/{}/responses", created.event.id);
    let body = json!({
        "participant_name": "Grace",
        "unavailable_slot_ids": [created.slots[1].id, created.slots[4].id]
    });

    server.put(&path).json(&body).await.assert_status_ok();
    let once = server
        .get(&format!("/api/events/{}", created.event.id))
        .await
        .json::<EventDetailsResponse>();
    server.put(&path).json(&body).await.assert_status_ok();
    let twice = server
        .get(&format!("/api/events/{}", created.event.id))
        .await
        .json::<EventDetailsResponse>();

    let counts = |d: &EventDetailsResponse| -> Vec<usize> {
        d.slots.iter().map(|s| s.available_count).collect()
    };
    assert_eq!(counts(&once), counts(&twice));
    assert_eq!(twice.participants, vec!["Grace".to_string()]);
}

#[tokio::test]
async fn test_submit_rejects_blank_name() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;

    server
        .put(&format!("/api/events/{}/responses", created.event.id))
        .json(&json!({ "participant_name": "   " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_rejects_slots_of_other_events() {
    let server = test_server();
    let planning = create_event(&server, "Planning").await;
    let offsite = create_event(&server, "Offsite").await;

    server
        .put(&format!("/api/events/{}/responses", planning.event.id))
        .json(&json!({
            "participant_name": "Ada",
            "unavailable_slot_ids": [offsite.slots[0].id]
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_to_unknown_event() {
    let server = test_server();

    server
        .put(&format!("/api/events/{}/responses", Uuid::new_v4()))
        .json(&json!({ "participant_name": "Ada" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_selection_of_unknown_participant_is_empty() {
    let server = test_server();
    let created = create_event(&server, "Planning").await;

    let selection = server
        .get(&format!(
            "/api/events/{}/participants/nobody/selection",
            created.event.id
        ))
        .await
        .json::<SelectionResponse>();

    assert_eq!(selection.participant_name, "nobody");
    assert!(selection.unavailable_slot_ids.is_empty());
}

#[tokio::test]
async fn test_selection_of_unknown_event_is_not_found() {
    let server = test_server();

    server
        .get(&format!(
            "/api/events/{}/participants/Ada/selection",
            Uuid::new_v4()
        ))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
