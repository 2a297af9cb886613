//! # Booking Slot Engine
//!
//! Builds the booking grid for a professional: the viewed day is cut into 48
//! half-hour slots, each marked available when one of the professional's
//! windows for that date fully covers it.
//!
//! ## Slot Computation
//!
//! For every slot boundary `b` in `0, 30, ..., 1410`:
//!
//! 1. Keep only the windows whose date equals the viewed date
//! 2. The slot is `Available` if any kept window covers `[b, b + 30)`,
//!    otherwise `Unavailable`
//! 3. A selected slot id overrides the status with `Selected`
//!
//! Slots are then grouped into rows of two for display.
//!
//! ## State
//!
//! [`SlotScheduleEngine`] owns the viewed date and the selection set. Every
//! mutation publishes a fresh [`EngineState`] on a `watch` channel so the
//! screen can recompute its [`DayScheduleState`] when notified.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::models::{
    availability::AvailabilityWindow,
    booking::{DayScheduleState, SLOT_MINUTES, SLOTS_PER_DAY, Slot, SlotStatus},
};

/// Returns whether the query slot `[query_from, query_to)` (minutes) lies
/// inside `window`.
///
/// A window with equal bounds covers the whole day. Otherwise the window must
/// contain the query entirely: a slot starting at the window end is outside,
/// a slot ending at the window end is inside.
pub fn is_window_included(window: &AvailabilityWindow, query_from: u32, query_to: u32) -> bool {
    if window.is_all_day() {
        return true;
    }

    window.from_minute() <= query_from && query_to <= window.to_minute()
}

/// Formats a date as `D.M.YYYY` without zero padding, e.g. `1.1.2024`.
pub fn format_date_label(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// Viewed date and selection of one booking session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    pub viewed_date: NaiveDate,
    /// Slot ids toggled on by the user. Ids are minute offsets and carry no date.
    pub selected_slot_ids: BTreeSet<u32>,
}

impl EngineState {
    pub fn new(viewed_date: NaiveDate) -> Self {
        Self {
            viewed_date,
            selected_slot_ids: BTreeSet::new(),
        }
    }

    /// Computes the 48-slot grid for `date`, in rows of two.
    pub fn compute_slots(
        &self,
        availability: &[AvailabilityWindow],
        date: NaiveDate,
    ) -> Vec<[Slot; 2]> {
        let windows: Vec<&AvailabilityWindow> =
            availability.iter().filter(|window| window.date == date).collect();

        (0..SLOTS_PER_DAY / 2)
            .map(|row| {
                let first = row * 2 * SLOT_MINUTES;
                [
                    self.slot(first, &windows),
                    self.slot(first + SLOT_MINUTES, &windows),
                ]
            })
            .collect()
    }

    /// Snapshot of the viewed date
    pub fn ui_state(&self, availability: &[AvailabilityWindow]) -> DayScheduleState {
        DayScheduleState {
            current_date_label: format_date_label(self.viewed_date),
            slots: self.compute_slots(availability, self.viewed_date),
        }
    }

    fn slot(&self, start: u32, windows: &[&AvailabilityWindow]) -> Slot {
        let end = start + SLOT_MINUTES;

        let status = if self.selected_slot_ids.contains(&start) {
            SlotStatus::Selected
        } else if windows
            .iter()
            .any(|window| is_window_included(window, start, end))
        {
            SlotStatus::Available
        } else {
            SlotStatus::Unavailable
        };

        Slot {
            id: start,
            start_label: format_minutes(start),
            end_label: format_minutes(end),
            status,
        }
    }
}

/// Stateful booking session for one professional screen.
///
/// Availability is passed into each query and never kept. Mutations take
/// `&mut self`, so a session has exactly one writer; observers follow along
/// through [`SlotScheduleEngine::subscribe`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use findpro_core::booking::SlotScheduleEngine;
/// use findpro_core::clock::FixedClock;
/// use findpro_core::models::availability::AvailabilityWindow;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let mut engine = SlotScheduleEngine::new(&FixedClock(today));
/// let availability = vec![AvailabilityWindow::from_minutes(today, 540, 600)];
///
/// engine.on_time_clicked(540);
/// let state = engine.ui_state(&availability);
///
/// assert_eq!(state.current_date_label, "2.1.2024");
/// assert!(state.slot(540).unwrap().is_selected());
/// ```
#[derive(Debug)]
pub struct SlotScheduleEngine {
    state: EngineState,
    publisher: watch::Sender<EngineState>,
}

impl SlotScheduleEngine {
    /// Starts a session on the clock's current date with nothing selected.
    pub fn new<C: Clock + ?Sized>(clock: &C) -> Self {
        let state = EngineState::new(clock.today());
        let (publisher, _) = watch::channel(state.clone());

        Self { state, publisher }
    }

    pub fn viewed_date(&self) -> NaiveDate {
        self.state.viewed_date
    }

    pub fn selected_slot_ids(&self) -> &BTreeSet<u32> {
        &self.state.selected_slot_ids
    }

    pub fn state(&self) -> EngineState {
        self.state.clone()
    }

    /// Receiver that is notified with the new state after every mutation
    pub fn subscribe(&self) -> watch::Receiver<EngineState> {
        self.publisher.subscribe()
    }

    pub fn is_window_included(
        &self,
        window: &AvailabilityWindow,
        query_from: u32,
        query_to: u32,
    ) -> bool {
        is_window_included(window, query_from, query_to)
    }

    pub fn compute_slots(
        &self,
        availability: &[AvailabilityWindow],
        date: NaiveDate,
    ) -> Vec<[Slot; 2]> {
        self.state.compute_slots(availability, date)
    }

    pub fn ui_state(&self, availability: &[AvailabilityWindow]) -> DayScheduleState {
        self.state.ui_state(availability)
    }

    /// Slots currently shown as selected on the viewed date, in order
    pub fn selected_slots(&self, availability: &[AvailabilityWindow]) -> Vec<Slot> {
        self.compute_slots(availability, self.state.viewed_date)
            .into_iter()
            .flatten()
            .filter(Slot::is_selected)
            .collect()
    }

    /// Toggles `slot_id` in the selection set.
    ///
    /// The slot's availability is not checked, so an unavailable slot can be
    /// selected too.
    pub fn on_time_clicked(&mut self, slot_id: u32) {
        let selected = if self.state.selected_slot_ids.remove(&slot_id) {
            false
        } else {
            self.state.selected_slot_ids.insert(slot_id);
            true
        };

        debug!(slot_id, selected, "Booking slot toggled");
        self.publish();
    }

    /// Drops every selected slot. Day navigation never does this on its own.
    pub fn clear_selection(&mut self) {
        if self.state.selected_slot_ids.is_empty() {
            return;
        }

        debug!(count = self.state.selected_slot_ids.len(), "Booking selection cleared");
        self.state.selected_slot_ids.clear();
        self.publish();
    }

    pub fn day_minus_one(&mut self) {
        match self.state.viewed_date.pred_opt() {
            Some(date) => self.move_to(date),
            None => warn!(date = %self.state.viewed_date, "Cannot move before the earliest date"),
        }
    }

    pub fn day_plus_one(&mut self) {
        match self.state.viewed_date.succ_opt() {
            Some(date) => self.move_to(date),
            None => warn!(date = %self.state.viewed_date, "Cannot move past the latest date"),
        }
    }

    /// Moves the viewed date by `days`, stopping at the earliest or latest
    /// representable date.
    pub fn shift_days(&mut self, days: i64) {
        let current = self.state.viewed_date;
        let step = Days::new(days.unsigned_abs());
        let target = if days < 0 {
            current.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
        } else {
            current.checked_add_days(step).unwrap_or(NaiveDate::MAX)
        };

        if target == current {
            if days != 0 {
                warn!(date = %current, days, "Cannot move past the calendar bounds");
            }
            return;
        }

        self.move_to(target);
    }

    fn move_to(&mut self, date: NaiveDate) {
        debug!(from = %self.state.viewed_date, to = %date, "Booking day changed");
        self.state.viewed_date = date;
        self.publish();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    #[test]
    fn new_reads_the_clock_once() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut clock = MockClock::new();
        clock.expect_today().times(1).return_const(today);

        let engine = SlotScheduleEngine::new(&clock);

        assert_eq!(engine.viewed_date(), today);
        assert!(engine.selected_slot_ids().is_empty());
    }

    #[test]
    fn labels_wrap_at_midnight() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(1410), "23:30");
        assert_eq!(format_minutes(1440), "00:00");
    }

    #[test]
    fn clear_selection_without_selection_does_not_notify() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut engine = SlotScheduleEngine::new(&crate::clock::FixedClock(today));
        let receiver = engine.subscribe();

        engine.clear_selection();

        assert!(!receiver.has_changed().unwrap());
    }
}
