//! # Selection Model
//!
//! Tracks which slots the participant currently editing has marked as
//! unavailable, and turns pointer drags over the slot grid into bulk changes
//! of that set.
//!
//! A drag starts on a cell and takes its mode from that cell: pressing on a
//! cell that is not yet marked selects, pressing on a marked cell deselects.
//! Hovering cells moves the far corner; releasing the pointer applies the mode
//! to every slot in the rectangle between the two corners.
//!
//! The participant marks times they *cannot* attend while storage records
//! whether they *are* available. [`to_availability`] and
//! [`unavailable_from_responses`] are the only places that flip between the
//! two.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    grid::{Cell, SlotGrid},
    models::{
        response::{Response, SlotAvailability},
        time_slot::TimeSlot,
    },
};

/// Slot ids marked unavailable by the participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet(BTreeSet<Uuid>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slot_id: Uuid) -> bool {
        self.0.contains(&slot_id)
    }

    pub fn insert(&mut self, slot_id: Uuid) -> bool {
        self.0.insert(slot_id)
    }

    pub fn remove(&mut self, slot_id: Uuid) -> bool {
        self.0.remove(&slot_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Uuid> {
        self.iter().collect()
    }
}

impl FromIterator<Uuid> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Uuid> for SelectionSet {
    fn extend<I: IntoIterator<Item = Uuid>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    Select,
    Deselect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: Cell,
        current: Cell,
        mode: DragMode,
    },
}

/// Editing state for one participant's grid.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selection: SelectionSet,
    drag: DragState,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a previously submitted selection.
    pub fn seeded(selection: SelectionSet) -> Self {
        Self {
            selection,
            drag: DragState::Idle,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Replaces the committed selection and drops any drag in progress.
    pub fn reset(&mut self, selection: SelectionSet) {
        self.selection = selection;
        self.drag = DragState::Idle;
    }

    /// Pointer pressed over `cell`.
    ///
    /// Returns `false` and stays idle when no slot lives at that address.
    pub fn pointer_down(&mut self, grid: &SlotGrid, cell: Cell) -> bool {
        let Some(slot_id) = grid.slot_at(cell) else {
            return false;
        };

        let mode = if self.selection.contains(slot_id) {
            DragMode::Deselect
        } else {
            DragMode::Select
        };
        self.drag = DragState::Dragging {
            anchor: cell,
            current: cell,
            mode,
        };
        true
    }

    /// Pointer entered `cell`; moves the far corner of an active drag.
    pub fn pointer_enter(&mut self, cell: Cell) {
        if let DragState::Dragging { current, .. } = &mut self.drag {
            *current = cell;
        }
    }

    /// Pointer released anywhere; commits the drag rectangle.
    ///
    /// Returns how many slots changed state.
    pub fn pointer_up(&mut self, grid: &SlotGrid) -> usize {
        let DragState::Dragging {
            anchor,
            current,
            mode,
        } = std::mem::take(&mut self.drag)
        else {
            return 0;
        };

        grid.slots_in_rect(anchor, current)
            .into_iter()
            .filter(|id| match mode {
                DragMode::Select => self.selection.insert(*id),
                DragMode::Deselect => self.selection.remove(*id),
            })
            .count()
    }

    /// Selection as it would be if the pointer were released right now.
    pub fn live_selection(&self, grid: &SlotGrid) -> SelectionSet {
        let mut live = self.selection.clone();
        if let DragState::Dragging {
            anchor,
            current,
            mode,
        } = self.drag
        {
            for id in grid.slots_in_rect(anchor, current) {
                match mode {
                    DragMode::Select => live.insert(id),
                    DragMode::Deselect => live.remove(id),
                };
            }
        }
        live
    }
}

/// Converts the unavailable-marking selection into one stored row per slot.
///
/// A slot is available exactly when it is not selected. Selected ids that do
/// not belong to `slots` are ignored.
pub fn to_availability(slots: &[TimeSlot], unavailable: &SelectionSet) -> Vec<SlotAvailability> {
    slots
        .iter()
        .map(|slot| SlotAvailability {
            time_slot_id: slot.id,
            is_available: !unavailable.contains(slot.id),
        })
        .collect()
}

/// Inverse of [`to_availability`]: the slots a participant stored as unavailable.
pub fn unavailable_from_responses(responses: &[Response], participant_name: &str) -> SelectionSet {
    responses
        .iter()
        .filter(|r| r.participant_name == participant_name && !r.is_available)
        .map(|r| r.time_slot_id)
        .collect()
}
