use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{MeetError, MeetResult},
    models::{
        event::{Event, NewEvent},
        response::{Response, SlotAvailability},
        time_slot::TimeSlot,
    },
    store::EventStore,
};

#[derive(Debug, Default)]
struct Tables {
    events: HashMap<Uuid, Event>,
    slots: Vec<TimeSlot>,
    responses: Vec<Response>,
}

/// Process-local [`EventStore`]; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    tables: RwLock<Tables>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn list_events(&self) -> MeetResult<Vec<Event>> {
        let tables = self.tables.read().await;
        let mut events: Vec<Event> = tables.events.values().cloned().collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> MeetResult<Option<Event>> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn list_slots(&self, event_id: Uuid) -> MeetResult<Vec<TimeSlot>> {
        let tables = self.tables.read().await;
        let mut slots: Vec<TimeSlot> = tables
            .slots
            .iter()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect();
        slots.sort_by_key(|s| s.slot_time);
        Ok(slots)
    }

    async fn list_responses(&self, event_id: Uuid) -> MeetResult<Vec<Response>> {
        let tables = self.tables.read().await;
        Ok(tables
            .responses
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_event(&self, event: NewEvent) -> MeetResult<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            title: event.title,
            description: event.description,
            created_at: Utc::now(),
        };
        debug!("Creating event in memory: id={}", event.id);

        self.tables
            .write()
            .await
            .events
            .insert(event.id, event.clone());
        Ok(event)
    }

    async fn bulk_insert_slots(
        &self,
        event_id: Uuid,
        slot_times: Vec<DateTime<Utc>>,
    ) -> MeetResult<Vec<TimeSlot>> {
        let mut tables = self.tables.write().await;
        if !tables.events.contains_key(&event_id) {
            return Err(MeetError::NotFound(format!(
                "Event with ID {} not found",
                event_id
            )));
        }

        let mut inserted = Vec::with_capacity(slot_times.len());
        for slot_time in slot_times {
            let exists = tables
                .slots
                .iter()
                .any(|s| s.event_id == event_id && s.slot_time == slot_time);
            if exists {
                continue;
            }
            let slot = TimeSlot {
                id: Uuid::new_v4(),
                event_id,
                slot_time,
            };
            tables.slots.push(slot.clone());
            inserted.push(slot);
        }
        Ok(inserted)
    }

    async fn replace_responses(
        &self,
        event_id: Uuid,
        participant_name: &str,
        availability: Vec<SlotAvailability>,
    ) -> MeetResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .responses
            .retain(|r| !(r.event_id == event_id && r.participant_name == participant_name));
        tables
            .responses
            .extend(availability.into_iter().map(|a| Response {
                event_id,
                time_slot_id: a.time_slot_id,
                participant_name: participant_name.to_string(),
                is_available: a.is_available,
            }));
        Ok(())
    }
}
