use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    aggregate::{ColorClass, HeatMap},
    grid::SlotGrid,
    models::{response::Response, time_slot::TimeSlot},
    selection::{SelectionSet, unavailable_from_responses},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields the organizer supplies; the store assigns id and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
}

impl NewEvent {
    /// Trims both fields and folds a blank description into `None`.
    pub fn new(title: &str, description: Option<&str>) -> Self {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self {
            title: title.trim().to_string(),
            description,
        }
    }
}

fn default_start_time() -> String {
    "09:00".to_string()
}

fn default_end_time() -> String {
    "17:00".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
}

impl Default for CreateEventRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            start_date: String::new(),
            end_date: String::new(),
            start_time: default_start_time(),
            end_time: default_end_time(),
        }
    }
}

/// Everything the respond/view screen needs for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    pub slots: Vec<TimeSlot>,
    pub responses: Vec<Response>,
}

impl EventDetails {
    pub fn grid(&self) -> SlotGrid {
        SlotGrid::from_slots(&self.slots)
    }

    pub fn heat_map(&self) -> HeatMap {
        HeatMap::from_responses(&self.responses)
    }

    /// Slots the participant marked unavailable in their last submission.
    pub fn previous_selection(&self, participant_name: &str) -> SelectionSet {
        unavailable_from_responses(&self.responses, participant_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSummary {
    pub id: Uuid,
    pub slot_time: DateTime<Utc>,
    pub row: usize,
    pub col: usize,
    pub available_count: usize,
    pub available_participants: Vec<String>,
    pub color_class: ColorClass,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetailsResponse {
    pub event: Event,
    pub participants: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub times: Vec<NaiveTime>,
    pub slots: Vec<SlotSummary>,
}

impl From<&EventDetails> for EventDetailsResponse {
    fn from(details: &EventDetails) -> Self {
        let grid = details.grid();
        let heat_map = details.heat_map();

        let slots = details
            .slots
            .iter()
            .filter_map(|slot| {
                let cell = grid.position(slot.id)?;
                let color_class = heat_map.color_class(slot.id);
                Some(SlotSummary {
                    id: slot.id,
                    slot_time: slot.slot_time,
                    row: cell.row,
                    col: cell.col,
                    available_count: heat_map.availability_count(slot.id),
                    available_participants: heat_map.available_participants(slot.id),
                    color_class,
                    color: color_class.color().to_string(),
                })
            })
            .collect();

        Self {
            event: details.event.clone(),
            participants: heat_map.participants(),
            dates: grid.dates().to_vec(),
            times: grid.times().to_vec(),
            slots,
        }
    }
}
