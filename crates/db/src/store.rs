use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use whenmeet_core::{
    errors::MeetResult,
    models::{
        event::{Event, NewEvent},
        response::{Response, SlotAvailability},
        time_slot::TimeSlot,
    },
    store::EventStore,
};

use crate::{DbPool, repositories};

/// [`EventStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: DbPool,
}

impl PgEventStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn list_events(&self) -> MeetResult<Vec<Event>> {
        let rows = repositories::event::list_events(&self.pool).await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn get_event(&self, id: Uuid) -> MeetResult<Option<Event>> {
        let row = repositories::event::get_event_by_id(&self.pool, id).await?;
        Ok(row.map(Event::from))
    }

    async fn list_slots(&self, event_id: Uuid) -> MeetResult<Vec<TimeSlot>> {
        let rows = repositories::time_slot::get_time_slots_by_event_id(&self.pool, event_id).await?;
        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    async fn list_responses(&self, event_id: Uuid) -> MeetResult<Vec<Response>> {
        let rows = repositories::response::get_responses_by_event_id(&self.pool, event_id).await?;
        Ok(rows.into_iter().map(Response::from).collect())
    }

    async fn create_event(&self, event: NewEvent) -> MeetResult<Event> {
        let row = repositories::event::create_event(
            &self.pool,
            &event.title,
            event.description.as_deref(),
        )
        .await?;
        Ok(row.into())
    }

    async fn bulk_insert_slots(
        &self,
        event_id: Uuid,
        slot_times: Vec<DateTime<Utc>>,
    ) -> MeetResult<Vec<TimeSlot>> {
        let rows =
            repositories::time_slot::create_time_slots(&self.pool, event_id, &slot_times).await?;
        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    async fn replace_responses(
        &self,
        event_id: Uuid,
        participant_name: &str,
        availability: Vec<SlotAvailability>,
    ) -> MeetResult<()> {
        repositories::response::replace_participant_responses(
            &self.pool,
            event_id,
            participant_name,
            &availability,
        )
        .await?;
        Ok(())
    }
}
