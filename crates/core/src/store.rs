//! # Event Store
//!
//! The persistence seam. The rest of the crate only ever talks to storage
//! through [`EventStore`]; the PostgreSQL implementation lives in the db crate
//! and [`memory::MemoryEventStore`] backs tests and local runs.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::MeetResult,
    models::{
        event::{Event, NewEvent},
        response::{Response, SlotAvailability},
        time_slot::TimeSlot,
    },
};

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, newest first.
    async fn list_events(&self) -> MeetResult<Vec<Event>>;

    async fn get_event(&self, id: Uuid) -> MeetResult<Option<Event>>;

    /// Slots of an event, ascending by slot time.
    async fn list_slots(&self, event_id: Uuid) -> MeetResult<Vec<TimeSlot>>;

    async fn list_responses(&self, event_id: Uuid) -> MeetResult<Vec<Response>>;

    async fn create_event(&self, event: NewEvent) -> MeetResult<Event>;

    async fn bulk_insert_slots(
        &self,
        event_id: Uuid,
        slot_times: Vec<DateTime<Utc>>,
    ) -> MeetResult<Vec<TimeSlot>>;

    /// Deletes every stored row of `participant_name` for the event, then
    /// inserts `availability` in their place.
    async fn replace_responses(
        &self,
        event_id: Uuid,
        participant_name: &str,
        availability: Vec<SlotAvailability>,
    ) -> MeetResult<()>;
}
