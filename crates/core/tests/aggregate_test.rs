use fake::{Fake, faker::name::en::Name};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_test::{Token, assert_tokens};
use uuid::Uuid;
use whenmeet_core::{
    aggregate::{ColorClass, HeatMap},
    models::response::Response,
};

fn response(slot: Uuid, name: &str, is_available: bool) -> Response {
    Response {
        event_id: Uuid::nil(),
        time_slot_id: slot,
        participant_name: name.to_string(),
        is_available,
    }
}

/// `available` of `total` participants can make `slot`.
fn responses_for(slot: Uuid, available: usize, total: usize) -> Vec<Response> {
    (0..total)
        .map(|i| response(slot, &format!("participant-{}", i), i < available))
        .collect()
}

#[rstest]
#[case(4, 4, ColorClass::Full)]
#[case(3, 4, ColorClass::High)]
#[case(2, 4, ColorClass::Mid)]
#[case(1, 4, ColorClass::Low)]
#[case(0, 4, ColorClass::None)]
#[case(2, 3, ColorClass::Mid)]
#[case(1, 3, ColorClass::Low)]
#[case(4, 5, ColorClass::High)]
#[case(1, 1, ColorClass::Full)]
fn test_ratio_boundaries(
    #[case] available: usize,
    #[case] total: usize,
    #[case] expected: ColorClass,
) {
    let slot = Uuid::new_v4();
    let heat_map = HeatMap::from_responses(&responses_for(slot, available, total));

    assert_eq!(heat_map.availability_count(slot), available);
    assert_eq!(heat_map.participant_count(), total);
    assert_eq!(heat_map.color_class(slot), expected);
}

#[test]
fn test_no_participants_is_always_none() {
    let heat_map = HeatMap::from_responses(&[]);
    let slot = Uuid::new_v4();

    assert_eq!(heat_map.participant_count(), 0);
    assert_eq!(heat_map.availability_count(slot), 0);
    assert_eq!(heat_map.ratio(slot), 0.0);
    assert_eq!(heat_map.color_class(slot), ColorClass::None);
}

#[test]
fn test_slot_without_responses_is_none() {
    let answered = Uuid::new_v4();
    let fresh = Uuid::new_v4();
    let heat_map = HeatMap::from_responses(&responses_for(answered, 2, 2));

    assert_eq!(heat_map.availability_count(fresh), 0);
    assert_eq!(heat_map.color_class(fresh), ColorClass::None);
    assert_eq!(heat_map.color_class(answered), ColorClass::Full);
}

#[test]
fn test_participants_are_distinct_across_slots() {
    let slots: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    let names: Vec<String> = (0..3).map(|i| format!("{}-{}", Name().fake::<String>(), i)).collect();

    let responses: Vec<Response> = names
        .iter()
        .flat_map(|name| slots.iter().map(move |slot| response(*slot, name, true)))
        .collect();
    let heat_map = HeatMap::from_responses(&responses);

    let mut expected = names.clone();
    expected.sort();
    assert_eq!(heat_map.participants(), expected);
    assert_eq!(heat_map.participant_count(), 3);
    assert_eq!(heat_map.available_participants(slots[0]), expected);
}

#[test]
fn test_unavailable_rows_still_count_as_participants() {
    let slot = Uuid::new_v4();
    let heat_map = HeatMap::from_responses(&[
        response(slot, "Ada", true),
        response(slot, "Grace", false),
    ]);

    assert_eq!(heat_map.participants(), vec!["Ada".to_string(), "Grace".to_string()]);
    assert_eq!(heat_map.available_participants(slot), vec!["Ada".to_string()]);
    assert_eq!(heat_map.ratio(slot), 0.5);
    assert_eq!(heat_map.color_class(slot), ColorClass::Mid);
}

#[test]
fn test_color_class_palette() {
    assert_eq!(ColorClass::Full.color(), "#2D8A3E");
    assert_eq!(ColorClass::None.color(), "#FFB6C1");
    assert_eq!(ColorClass::Mid.to_string(), "mid");
    assert!(ColorClass::Full < ColorClass::High);
}

#[test]
fn test_color_class_wire_names() {
    assert_tokens(
        &ColorClass::High,
        &[Token::UnitVariant {
            name: "ColorClass",
            variant: "high",
        }],
    );
    assert_tokens(
        &ColorClass::None,
        &[Token::UnitVariant {
            name: "ColorClass",
            variant: "none",
        }],
    );
}
