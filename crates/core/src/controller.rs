//! # Poll Controller
//!
//! In-process navigation between the three screens of the tool and the state
//! behind them: the event list, the creation form, and the respond/view screen
//! with its editable grid.
//!
//! Failed loads leave whatever was on screen untouched. Failed actions surface
//! their error to the caller, who is expected to show it to the user.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    aggregate::HeatMap,
    errors::{MeetError, MeetResult},
    grid::{Cell, SlotGrid},
    models::{
        event::{CreateEventRequest, Event, EventDetails},
        response::SubmitAvailabilityResponse,
    },
    selection::{SelectionModel, SelectionSet},
    service::PollService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    CreateEvent,
    Event,
}

#[derive(Debug)]
pub struct PollController {
    service: PollService,
    screen: Screen,
    events: Vec<Event>,
    form: CreateEventRequest,
    current: Option<EventDetails>,
    participant_name: String,
    selection: SelectionModel,
}

impl PollController {
    pub fn new(service: PollService) -> Self {
        Self {
            service,
            screen: Screen::Home,
            events: Vec::new(),
            form: CreateEventRequest::default(),
            current: None,
            participant_name: String::new(),
            selection: SelectionModel::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn current(&self) -> Option<&EventDetails> {
        self.current.as_ref()
    }

    pub fn participant_name(&self) -> &str {
        &self.participant_name
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn form(&self) -> &CreateEventRequest {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateEventRequest {
        &mut self.form
    }

    /// Whether a store backs this controller; when not, the UI should say so.
    pub fn is_configured(&self) -> bool {
        self.service.is_configured()
    }

    /// Reloads the home list, keeping the previous list if the load fails.
    pub async fn refresh_events(&mut self) {
        match self.service.list_events().await {
            Ok(events) => self.events = events,
            Err(err) => warn!("Could not load events: {}", err),
        }
    }

    pub fn open_create_form(&mut self) {
        self.screen = Screen::CreateEvent;
    }

    /// Leaves the current screen for the event list.
    pub fn back_to_events(&mut self) {
        self.screen = Screen::Home;
        self.current = None;
        self.selection.reset(SelectionSet::new());
    }

    /// Submits the creation form and opens the new event.
    pub async fn create_event(&mut self) -> MeetResult<Uuid> {
        let details = self.service.create_event(&self.form).await?;
        let event_id = details.event.id;

        self.form = CreateEventRequest::default();
        self.refresh_events().await;
        self.show_event(details);
        Ok(event_id)
    }

    /// Loads an event and switches to its respond/view screen.
    pub async fn open_event(&mut self, event_id: Uuid) -> MeetResult<()> {
        let details = self.service.load_event(event_id).await?;
        self.show_event(details);
        Ok(())
    }

    fn show_event(&mut self, details: EventDetails) {
        let same_event = self
            .current
            .as_ref()
            .is_some_and(|current| current.event.id == details.event.id);
        // Without a name there is nothing to seed from; unsaved marks survive a reload
        match self.participant_name.trim() {
            "" if same_event => {}
            "" => self.selection.reset(SelectionSet::new()),
            name => self.selection.reset(details.previous_selection(name)),
        }
        debug!("Showing event {}", details.event.id);
        self.current = Some(details);
        self.screen = Screen::Event;
    }

    pub fn set_participant_name(&mut self, name: impl Into<String>) {
        self.participant_name = name.into();
    }

    /// Grid of the open event, rebuilt from its current slots.
    pub fn grid(&self) -> SlotGrid {
        self.current
            .as_ref()
            .map(EventDetails::grid)
            .unwrap_or_default()
    }

    pub fn heat_map(&self) -> HeatMap {
        self.current
            .as_ref()
            .map(EventDetails::heat_map)
            .unwrap_or_default()
    }

    /// Selection including an unfinished drag, for rendering.
    pub fn live_selection(&self) -> SelectionSet {
        self.selection.live_selection(&self.grid())
    }

    pub fn pointer_down(&mut self, cell: Cell) -> bool {
        let grid = self.grid();
        self.selection.pointer_down(&grid, cell)
    }

    pub fn pointer_enter(&mut self, cell: Cell) {
        self.selection.pointer_enter(cell);
    }

    pub fn pointer_up(&mut self) -> usize {
        let grid = self.grid();
        self.selection.pointer_up(&grid)
    }

    /// Saves the participant's availability and reloads the event.
    pub async fn submit(&mut self) -> MeetResult<SubmitAvailabilityResponse> {
        let event_id = self
            .current
            .as_ref()
            .map(|d| d.event.id)
            .ok_or_else(|| MeetError::Validation("No event is open".to_string()))?;

        let saved = self
            .service
            .submit_availability(event_id, &self.participant_name, self.selection.selection())
            .await?;

        if let Err(err) = self.open_event(event_id).await {
            warn!("Saved availability but could not reload event {}: {}", event_id, err);
        }
        Ok(saved)
    }
}
