//! # Availability Aggregation
//!
//! Folds every stored response of an event into per-slot counts and buckets
//! each slot by the share of participants available at that time.
//!
//! The denominator is the number of distinct participant names across all
//! responses of the event, not the number of responses for the slot. Since a
//! submission always covers every slot, the two only differ for slots created
//! after someone responded.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::response::Response;

/// Display bucket for a slot's availability ratio, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Full,
    High,
    Mid,
    Low,
    None,
}

impl ColorClass {
    /// Buckets a ratio in `[0, 1]`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            ColorClass::Full
        } else if ratio >= 0.75 {
            ColorClass::High
        } else if ratio >= 0.5 {
            ColorClass::Mid
        } else if ratio >= 0.25 {
            ColorClass::Low
        } else {
            ColorClass::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorClass::Full => "full",
            ColorClass::High => "high",
            ColorClass::Mid => "mid",
            ColorClass::Low => "low",
            ColorClass::None => "none",
        }
    }

    /// Heat-map fill color.
    pub fn color(&self) -> &'static str {
        match self {
            ColorClass::Full => "#2D8A3E",
            ColorClass::High => "#52A665",
            ColorClass::Mid => "#7BC18C",
            ColorClass::Low => "#A5DCB3",
            ColorClass::None => "#FFB6C1",
        }
    }
}

impl std::fmt::Display for ColorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-side summary of one event's responses.
#[derive(Debug, Clone, Default)]
pub struct HeatMap {
    participants: BTreeSet<String>,
    available: HashMap<Uuid, Vec<String>>,
}

impl HeatMap {
    pub fn from_responses(responses: &[Response]) -> Self {
        let mut heat_map = Self::default();
        for response in responses {
            heat_map
                .participants
                .insert(response.participant_name.clone());
            if response.is_available {
                heat_map
                    .available
                    .entry(response.time_slot_id)
                    .or_default()
                    .push(response.participant_name.clone());
            }
        }
        heat_map
    }

    /// Number of responses marking `slot_id` available.
    pub fn availability_count(&self, slot_id: Uuid) -> usize {
        self.available.get(&slot_id).map_or(0, Vec::len)
    }

    /// Distinct participant names, sorted.
    pub fn participants(&self) -> Vec<String> {
        self.participants.iter().cloned().collect()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Names available at `slot_id`, sorted.
    pub fn available_participants(&self, slot_id: Uuid) -> Vec<String> {
        let mut names = self.available.get(&slot_id).cloned().unwrap_or_default();
        names.sort();
        names.dedup();
        names
    }

    /// Share of participants available at `slot_id`, in `[0, 1]`.
    pub fn ratio(&self, slot_id: Uuid) -> f64 {
        let total = self.participant_count().max(1);
        self.availability_count(slot_id) as f64 / total as f64
    }

    pub fn color_class(&self, slot_id: Uuid) -> ColorClass {
        if self.participant_count() == 0 {
            return ColorClass::None;
        }
        ColorClass::from_ratio(self.ratio(slot_id))
    }
}
