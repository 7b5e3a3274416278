//! # Availability Handlers
//!
//! Participants send the slots they *cannot* attend; the service stores one
//! availability row per slot of the event. Reading a participant's selection
//! back returns the same unavailable set, ready to seed an editing grid.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use uuid::Uuid;
use whenmeet_core::{
    models::response::{SelectionResponse, SubmitAvailabilityRequest, SubmitAvailabilityResponse},
    selection::SelectionSet,
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Replaces a participant's availability for an event
///
/// # Endpoint
///
/// ```text
/// PUT /api/events/:id/responses
/// {"participant_name": "Ada", "unavailable_slot_ids": ["..."]}
/// ```
///
/// Every slot of the event not listed is stored as available. Submitting the
/// same body twice leaves the stored state unchanged.
///
/// # Errors
///
/// * `MeetError::Validation` - blank name, or a slot id from another event
/// * `MeetError::NotFound` - unknown event
#[axum::debug_handler]
pub async fn submit_availability(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<SubmitAvailabilityRequest>,
) -> Result<Json<SubmitAvailabilityResponse>, AppError> {
    let unavailable: SelectionSet = payload.unavailable_slot_ids.into_iter().collect();

    let saved = state
        .service
        .submit_availability(event_id, &payload.participant_name, &unavailable)
        .await?;

    Ok(Json(saved))
}

/// Returns the slots a participant last marked unavailable
#[axum::debug_handler]
pub async fn get_selection(
    State(state): State<Arc<ApiState>>,
    Path((event_id, participant_name)): Path<(Uuid, String)>,
) -> Result<Json<SelectionResponse>, AppError> {
    let selection = state
        .service
        .previous_selection(event_id, &participant_name)
        .await?;

    Ok(Json(SelectionResponse {
        participant_name,
        unavailable_slot_ids: selection.to_vec(),
    }))
}
