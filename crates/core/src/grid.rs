//! # Slot Grid
//!
//! Lays an event's slots out as a two-dimensional grid: one column per
//! calendar day (in the order days first appear in the slot list) and one row
//! per distinct time of day (sorted). Rendering and drag selection both address
//! cells through this grouping, so a grid should be rebuilt from the current
//! slot list rather than kept around across slot changes.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::time_slot::TimeSlot;

/// Address of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotGrid {
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
    cells: HashMap<Cell, Uuid>,
    positions: HashMap<Uuid, Cell>,
}

impl SlotGrid {
    pub fn from_slots(slots: &[TimeSlot]) -> Self {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for slot in slots {
            let date = slot.date();
            if !dates.contains(&date) {
                dates.push(date);
            }
        }

        let times: Vec<NaiveTime> = slots
            .iter()
            .map(TimeSlot::time_of_day)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut cells = HashMap::with_capacity(slots.len());
        let mut positions = HashMap::with_capacity(slots.len());
        for slot in slots {
            let (Some(col), Ok(row)) = (
                dates.iter().position(|d| *d == slot.date()),
                times.binary_search(&slot.time_of_day()),
            ) else {
                continue;
            };
            let cell = Cell::new(row, col);
            // First slot at an address wins, matching a top-down scan of the day
            cells.entry(cell).or_insert(slot.id);
            positions.entry(slot.id).or_insert(cell);
        }

        Self {
            dates,
            times,
            cells,
            positions,
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn row_count(&self) -> usize {
        self.times.len()
    }

    pub fn col_count(&self) -> usize {
        self.dates.len()
    }

    /// Slot at `cell`, if the address is inside the grid and occupied.
    pub fn slot_at(&self, cell: Cell) -> Option<Uuid> {
        self.cells.get(&cell).copied()
    }

    pub fn position(&self, slot_id: Uuid) -> Option<Cell> {
        self.positions.get(&slot_id).copied()
    }

    /// Slots inside the inclusive rectangle spanned by two corner cells.
    ///
    /// Corners may be given in any order. Addresses outside the grid and empty
    /// cells are skipped. Results are ordered row by row.
    pub fn slots_in_rect(&self, a: Cell, b: Cell) -> Vec<Uuid> {
        if self.cells.is_empty() {
            return Vec::new();
        }

        let max_row = a.row.max(b.row).min(self.row_count().saturating_sub(1));
        let max_col = a.col.max(b.col).min(self.col_count().saturating_sub(1));
        let min_row = a.row.min(b.row);
        let min_col = a.col.min(b.col);

        let mut ids = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if let Some(id) = self.slot_at(Cell::new(row, col)) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}
