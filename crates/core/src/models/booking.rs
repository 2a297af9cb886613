use serde::{Deserialize, Serialize};

/// Width of one bookable slot
pub const SLOT_MINUTES: u32 = 30;
pub const MINUTES_PER_DAY: u32 = 24 * 60;
pub const SLOTS_PER_DAY: u32 = MINUTES_PER_DAY / SLOT_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Unavailable,
    Selected,
}

/// One 30-minute segment of the viewed day.
///
/// `id` is the slot start in minutes from midnight and identifies the slot
/// for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: u32,
    pub start_label: String,
    pub end_label: String,
    pub status: SlotStatus,
}

impl Slot {
    pub fn is_selected(&self) -> bool {
        self.status == SlotStatus::Selected
    }
}

/// Snapshot of the booking screen for the viewed date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleState {
    pub current_date_label: String,
    /// All slots of the day in rows of two
    pub slots: Vec<[Slot; 2]>,
}

impl DayScheduleState {
    /// Slots in chronological order, ignoring the row grouping
    pub fn iter_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }

    pub fn slot(&self, id: u32) -> Option<&Slot> {
        self.iter_slots().find(|slot| slot.id == id)
    }
}
