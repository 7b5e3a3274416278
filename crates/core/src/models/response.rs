use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One participant's stored availability for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub participant_name: String,
    pub is_available: bool,
}

/// Per-slot payload written when a participant submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time_slot_id: Uuid,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAvailabilityRequest {
    pub participant_name: String,
    #[serde(default)]
    pub unavailable_slot_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAvailabilityResponse {
    pub event_id: Uuid,
    pub participant_name: String,
    pub available_count: usize,
    pub unavailable_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub participant_name: String,
    pub unavailable_slot_ids: Vec<Uuid>,
}
