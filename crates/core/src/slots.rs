//! # Slot Generation
//!
//! Expands an organizer's date range and daily window into the discrete
//! half-hour time points participants respond to.
//!
//! Every calendar day in `[start_date, end_date]` contributes the same run of
//! slots: for each whole hour from the start hour up to (not including) the end
//! hour, one slot on the hour and one on the half hour. A window ending at
//! `17:45` therefore stops at `16:30`, and a window starting at `09:30` still
//! begins at `09:00`. Clock times are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::errors::{MeetError, MeetResult};

/// Minutes between two consecutive slots of the same day.
pub const SLOT_MINUTES: u32 = 30;

/// An organizer's candidate range: which days, and which hours on each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl SlotWindow {
    /// Parses `YYYY-MM-DD` dates and `HH:MM` (or `HH:MM:SS`) clock times.
    ///
    /// # Errors
    ///
    /// * `MeetError::Validation` - a field is blank or malformed
    pub fn parse(
        start_date: &str,
        end_date: &str,
        start_time: &str,
        end_time: &str,
    ) -> MeetResult<Self> {
        Ok(Self {
            start_date: parse_date("start date", start_date)?,
            end_date: parse_date("end date", end_date)?,
            start_time: parse_time("start time", start_time)?,
            end_time: parse_time("end time", end_time)?,
        })
    }

    /// Number of calendar days covered, zero for an inverted range.
    pub fn day_count(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days();
        if days < 0 { 0 } else { days as usize + 1 }
    }

    /// All slot timestamps of the window in ascending order.
    ///
    /// Empty when the start date lies after the end date or the end hour is not
    /// after the start hour.
    pub fn slot_times(&self) -> Vec<DateTime<Utc>> {
        let mut times = Vec::new();
        if self.start_date > self.end_date {
            return times;
        }

        let hours = self.start_time.hour()..self.end_time.hour();
        let mut day = self.start_date;
        loop {
            for hour in hours.clone() {
                for minute in (0..60).step_by(SLOT_MINUTES as usize) {
                    if let Some(at) = day.and_hms_opt(hour, minute, 0) {
                        times.push(Utc.from_utc_datetime(&at));
                    }
                }
            }

            if day >= self.end_date {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        times
    }
}

/// Loose form of [`SlotWindow::slot_times`] for raw form input.
///
/// Unparsable input yields no slots rather than an error; callers that need to
/// report the problem should go through [`SlotWindow::parse`].
pub fn generate_slot_times(
    start_date: &str,
    end_date: &str,
    start_time: &str,
    end_time: &str,
) -> Vec<DateTime<Utc>> {
    SlotWindow::parse(start_date, end_date, start_time, end_time)
        .map(|window| window.slot_times())
        .unwrap_or_default()
}

fn parse_date(field: &str, value: &str) -> MeetResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MeetError::Validation(format!("The {} is required", field)));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        MeetError::Validation(format!("Invalid {} '{}', expected YYYY-MM-DD", field, value))
    })
}

fn parse_time(field: &str, value: &str) -> MeetResult<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MeetError::Validation(format!("The {} is required", field)));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| {
            MeetError::Validation(format!("Invalid {} '{}', expected HH:MM", field, value))
        })
}
