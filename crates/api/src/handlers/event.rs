//! # Event Handlers
//!
//! Listing, creating and viewing events. Creating an event also generates its
//! half-hour slot grid from the submitted date range and daily window.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;
use whenmeet_core::models::event::{CreateEventRequest, Event, EventDetailsResponse};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists every event, newest first
///
/// # Endpoint
///
/// ```text
/// GET /api/events
/// ```
///
/// Without a configured store the list is empty rather than an error.
#[axum::debug_handler]
pub async fn list_events(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.service.list_events().await?;
    Ok(Json(events))
}

/// Creates an event and its time slots
///
/// # Endpoint
///
/// ```text
/// POST /api/events
/// {"title": "...", "start_date": "2024-06-03", "end_date": "2024-06-05",
///  "start_time": "09:00", "end_time": "17:00"}
/// ```
///
/// # Errors
///
/// * `MeetError::Validation` - missing title or dates, or unparsable values
/// * `MeetError::NotConfigured` - no event store
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventDetailsResponse>), AppError> {
    let details = state.service.create_event(&payload).await?;
    Ok((StatusCode::CREATED, Json(EventDetailsResponse::from(&details))))
}

/// Returns an event with its heat map laid out on the slot grid
#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDetailsResponse>, AppError> {
    let details = state.service.load_event(id).await?;
    Ok(Json(EventDetailsResponse::from(&details)))
}
