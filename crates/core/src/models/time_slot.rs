use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One half-hour candidate time point of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slot_time: DateTime<Utc>,
}

impl TimeSlot {
    /// Calendar day the slot falls on; this is its grid column.
    pub fn date(&self) -> NaiveDate {
        self.slot_time.date_naive()
    }

    /// Clock time of the slot; this is its grid row.
    pub fn time_of_day(&self) -> NaiveTime {
        self.slot_time.time()
    }
}
