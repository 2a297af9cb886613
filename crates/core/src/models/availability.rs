use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::booking::MINUTES_PER_DAY;

/// One interval during which a professional is bookable on a single date.
///
/// `from` and `to` are seconds since midnight. A window whose `from` equals
/// its `to` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub date: NaiveDate,
    pub from: u32,
    pub to: u32,
}

impl AvailabilityWindow {
    pub fn new(date: NaiveDate, from: u32, to: u32) -> Self {
        Self { date, from, to }
    }

    /// Builds a window from minute offsets instead of seconds.
    pub fn from_minutes(date: NaiveDate, from: u32, to: u32) -> Self {
        Self::new(date, from * 60, to * 60)
    }

    pub fn is_all_day(&self) -> bool {
        self.from == self.to
    }

    /// Window start in whole minutes, rounded up so a partial minute is not covered.
    pub fn from_minute(&self) -> u32 {
        self.from.div_ceil(60)
    }

    /// Window end in whole minutes, rounded down. An end of `00:00` closes the day at minute 1440.
    pub fn to_minute(&self) -> u32 {
        if self.to == 0 {
            MINUTES_PER_DAY
        } else {
            self.to / 60
        }
    }
}

/// Availability as it arrives from the professional API:
/// `{ "date": "2024-01-01", "from": "09:00:00", "to": "17:30:00" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalAvailability {
    pub date: NaiveDate,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl ProfessionalAvailability {
    /// Converts the wire record into a window the booking engine accepts.
    ///
    /// # Errors
    ///
    /// * `BookingError::Validation` - either bound carries a sub-second component
    pub fn to_window(&self) -> BookingResult<AvailabilityWindow> {
        let from = whole_seconds(self.from, "from")?;
        let to = whole_seconds(self.to, "to")?;

        Ok(AvailabilityWindow::new(self.date, from, to))
    }
}

fn whole_seconds(time: NaiveTime, field: &str) -> BookingResult<u32> {
    if time.nanosecond() != 0 {
        return Err(BookingError::Validation(format!(
            "Availability `{}` must be whole seconds, got {}",
            field, time
        )));
    }

    Ok(time.num_seconds_from_midnight())
}
