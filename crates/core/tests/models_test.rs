use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string};
use uuid::Uuid;
use whenmeet_core::{
    aggregate::ColorClass,
    models::{
        event::{CreateEventRequest, Event, EventDetails, EventDetailsResponse, NewEvent},
        response::{Response, SubmitAvailabilityRequest},
        time_slot::TimeSlot,
    },
};

#[test]
fn test_event_serialization() {
    let event = Event {
        id: Uuid::new_v4(),
        title: "Team Meeting".to_string(),
        description: Some("Weekly sync".to_string()),
        created_at: Utc::now(),
    };

    let json = to_string(&event).expect("Failed to serialize event");
    let deserialized: Event = from_str(&json).expect("Failed to deserialize event");

    assert_eq!(deserialized, event);
}

#[rstest]
#[case("Team Meeting", None, None)]
#[case("  Team Meeting  ", Some("   "), None)]
#[case("Team Meeting", Some(" Weekly sync "), Some("Weekly sync"))]
fn test_new_event_normalization(
    #[case] title: &str,
    #[case] description: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let event = NewEvent::new(title, description);

    assert_eq!(event.title, "Team Meeting");
    assert_eq!(event.description.as_deref(), expected);
}

#[test]
fn test_create_event_request_defaults() {
    let request: CreateEventRequest = serde_json::from_value(json!({
        "title": "Offsite",
        "start_date": "2024-06-03",
        "end_date": "2024-06-05"
    }))
    .expect("Failed to deserialize request");

    assert_eq!(request.description, None);
    assert_eq!(request.start_time, "09:00");
    assert_eq!(request.end_time, "17:00");
}

#[test]
fn test_submit_request_defaults_to_fully_available() {
    let request: SubmitAvailabilityRequest =
        serde_json::from_value(json!({ "participant_name": "Ada" })).unwrap();

    assert!(request.unavailable_slot_ids.is_empty());
}

#[test]
fn test_details_response_places_slots_on_grid() {
    let event = Event {
        id: Uuid::new_v4(),
        title: "Offsite".to_string(),
        description: None,
        created_at: Utc::now(),
    };
    let slots: Vec<TimeSlot> = ["2024-06-03T09:00:00Z", "2024-06-03T09:30:00Z", "2024-06-04T09:00:00Z"]
        .iter()
        .map(|t| TimeSlot {
            id: Uuid::new_v4(),
            event_id: event.id,
            slot_time: t.parse().unwrap(),
        })
        .collect();
    let responses = vec![
        Response {
            event_id: event.id,
            time_slot_id: slots[2].id,
            participant_name: "Ada".to_string(),
            is_available: true,
        },
        Response {
            event_id: event.id,
            time_slot_id: slots[0].id,
            participant_name: "Ada".to_string(),
            is_available: false,
        },
    ];
    let details = EventDetails {
        event,
        slots,
        responses,
    };

    let response = EventDetailsResponse::from(&details);

    assert_eq!(response.participants, vec!["Ada".to_string()]);
    assert_eq!(response.dates.len(), 2);
    assert_eq!(response.times.len(), 2);
    assert_eq!(response.slots.len(), 3);
    assert_eq!((response.slots[1].row, response.slots[1].col), (1, 0));
    assert_eq!((response.slots[2].row, response.slots[2].col), (0, 1));
    assert_eq!(response.slots[0].color_class, ColorClass::None);
    assert_eq!(response.slots[2].color_class, ColorClass::Full);
    assert_eq!(response.slots[2].color, "#2D8A3E");
    assert_eq!(response.slots[2].available_participants, vec!["Ada".to_string()]);
}
