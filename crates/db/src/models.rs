use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use whenmeet_core::models::{event::Event, response::Response, time_slot::TimeSlot};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slot_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub participant_name: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbEvent> for Event {
    fn from(row: DbEvent) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.filter(|d| !d.is_empty()),
            created_at: row.created_at,
        }
    }
}

impl From<DbTimeSlot> for TimeSlot {
    fn from(row: DbTimeSlot) -> Self {
        Self {
            id: row.id,
            event_id: row.event_id,
            slot_time: row.slot_time,
        }
    }
}

impl From<DbResponse> for Response {
    fn from(row: DbResponse) -> Self {
        Self {
            event_id: row.event_id,
            time_slot_id: row.time_slot_id,
            participant_name: row.participant_name,
            is_available: row.is_available,
        }
    }
}
