//! # Poll Service
//!
//! Orchestrates the three user-facing flows (browse events, create an event,
//! respond to an event) on top of an [`EventStore`].
//!
//! Whether a store exists is decided once, when the service is built. Without
//! one the service runs degraded: the event list is simply empty and every
//! other operation reports [`MeetError::NotConfigured`].
//!
//! Reads are idempotent and are retried once after a storage failure. Writes
//! are issued exactly once.

use std::{collections::HashSet, future::Future, sync::Arc};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    errors::{MeetError, MeetResult},
    models::{
        event::{CreateEventRequest, Event, EventDetails, NewEvent},
        response::SubmitAvailabilityResponse,
    },
    selection::{SelectionSet, to_availability, unavailable_from_responses},
    slots::SlotWindow,
    store::EventStore,
};

#[derive(Clone)]
pub struct PollService {
    store: Option<Arc<dyn EventStore>>,
}

impl std::fmt::Debug for PollService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollService")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl PollService {
    pub fn new(store: Option<Arc<dyn EventStore>>) -> Self {
        Self { store }
    }

    pub fn with_store(store: Arc<dyn EventStore>) -> Self {
        Self::new(Some(store))
    }

    /// A service with no backing store.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> MeetResult<&Arc<dyn EventStore>> {
        self.store.as_ref().ok_or(MeetError::NotConfigured)
    }

    /// Events for the home screen, newest first.
    pub async fn list_events(&self) -> MeetResult<Vec<Event>> {
        let Some(store) = &self.store else {
            warn!("No event store configured, listing no events");
            return Ok(Vec::new());
        };
        read_with_retry("list_events", || store.list_events()).await
    }

    /// Loads an event together with its slots and every stored response.
    ///
    /// # Errors
    ///
    /// * `MeetError::NotConfigured` - no store
    /// * `MeetError::NotFound` - no event with this id
    /// * `MeetError::Store` - the store failed twice in a row
    pub async fn load_event(&self, event_id: Uuid) -> MeetResult<EventDetails> {
        let store = self.store()?;

        let event = read_with_retry("get_event", || store.get_event(event_id))
            .await?
            .ok_or_else(|| MeetError::NotFound(format!("Event with ID {} not found", event_id)))?;
        let slots = read_with_retry("list_slots", || store.list_slots(event_id)).await?;
        let responses = read_with_retry("list_responses", || store.list_responses(event_id)).await?;

        debug!(
            "Loaded event {}: {} slots, {} responses",
            event_id,
            slots.len(),
            responses.len()
        );

        Ok(EventDetails {
            event,
            slots,
            responses,
        })
    }

    /// Creates an event and its slot grid from the organizer's form.
    ///
    /// Nothing is written unless the title and both dates are present and the
    /// dates and times parse.
    ///
    /// The event and its slots are two separate writes. If the slot insert
    /// fails, the event stays listed with no slots.
    pub async fn create_event(&self, request: &CreateEventRequest) -> MeetResult<EventDetails> {
        let store = self.store()?;

        if request.title.trim().is_empty()
            || request.start_date.trim().is_empty()
            || request.end_date.trim().is_empty()
        {
            return Err(MeetError::Validation(
                "Please fill in the title and date range".to_string(),
            ));
        }
        let window = SlotWindow::parse(
            &request.start_date,
            &request.end_date,
            &request.start_time,
            &request.end_time,
        )?;
        let slot_times = window.slot_times();
        if slot_times.is_empty() {
            warn!(
                "Date range {} to {} between {} and {} yields no slots",
                window.start_date, window.end_date, window.start_time, window.end_time
            );
        }

        let event = store
            .create_event(NewEvent::new(&request.title, request.description.as_deref()))
            .await?;
        let mut slots = store.bulk_insert_slots(event.id, slot_times).await?;
        slots.sort_by_key(|s| s.slot_time);

        info!(
            "Created event {} '{}' with {} slots",
            event.id,
            event.title,
            slots.len()
        );

        Ok(EventDetails {
            event,
            slots,
            responses: Vec::new(),
        })
    }

    /// Replaces a participant's responses with one row per slot of the event.
    ///
    /// `unavailable` holds the slots the participant cannot attend; every other
    /// slot is stored as available.
    pub async fn submit_availability(
        &self,
        event_id: Uuid,
        participant_name: &str,
        unavailable: &SelectionSet,
    ) -> MeetResult<SubmitAvailabilityResponse> {
        let store = self.store()?;

        let participant_name = participant_name.trim();
        if participant_name.is_empty() {
            return Err(MeetError::Validation("Please enter your name".to_string()));
        }

        ensure_event(store, event_id).await?;
        let slots = read_with_retry("list_slots", || store.list_slots(event_id)).await?;

        let known: HashSet<Uuid> = slots.iter().map(|s| s.id).collect();
        if let Some(foreign) = unavailable.iter().find(|id| !known.contains(id)) {
            return Err(MeetError::Validation(format!(
                "Time slot {} does not belong to event {}",
                foreign, event_id
            )));
        }

        let availability = to_availability(&slots, unavailable);
        let available_count = availability.iter().filter(|a| a.is_available).count();
        let unavailable_count = availability.len() - available_count;

        store
            .replace_responses(event_id, participant_name, availability)
            .await?;

        info!(
            "Saved availability of '{}' for event {}: {} available, {} unavailable",
            participant_name, event_id, available_count, unavailable_count
        );

        Ok(SubmitAvailabilityResponse {
            event_id,
            participant_name: participant_name.to_string(),
            available_count,
            unavailable_count,
        })
    }

    /// The participant's stored unavailable slots, used to seed editing.
    ///
    /// An unknown event is `MeetError::NotFound`, not an empty selection.
    pub async fn previous_selection(
        &self,
        event_id: Uuid,
        participant_name: &str,
    ) -> MeetResult<SelectionSet> {
        let store = self.store()?;
        ensure_event(store, event_id).await?;
        let responses = read_with_retry("list_responses", || store.list_responses(event_id)).await?;
        Ok(unavailable_from_responses(&responses, participant_name.trim()))
    }
}

async fn ensure_event(store: &Arc<dyn EventStore>, event_id: Uuid) -> MeetResult<()> {
    match read_with_retry("get_event", || store.get_event(event_id)).await? {
        Some(_) => Ok(()),
        None => Err(MeetError::NotFound(format!(
            "Event with ID {} not found",
            event_id
        ))),
    }
}

async fn read_with_retry<T, F, Fut>(operation: &str, mut call: F) -> MeetResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = MeetResult<T>>,
{
    match call().await {
        Err(err) if err.is_transient() => {
            warn!("{} failed, retrying once: {}", operation, err);
            call().await
        }
        result => result,
    }
}
