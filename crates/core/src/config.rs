//! # Booking Configuration
//!
//! Loads settings for booking sessions from environment variables.
//!
//! ## Environment Variables
//!
//! - `BOOKING_TIMEZONE`: IANA timezone used to decide "today" (default: "UTC")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `BOOKING_FIXTURE`: Path to a professional JSON file (optional)
//! - `BOOKING_DAY_OFFSET`: Days to move from today before rendering (default: 0)
//! - `BOOKING_SELECT`: Comma-separated slot ids to toggle (optional)

use std::{env, path::PathBuf};

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

use crate::clock::SystemClock;

/// Configuration for a booking session
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use findpro_core::config::BookingConfig;
///
/// fn example() -> Result<()> {
///     let config = BookingConfig::from_env()?;
///     println!("Booking in {}", config.timezone);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Timezone the system clock is read in
    pub timezone: Tz,

    /// Log level for the application
    pub log_level: Level,

    /// Professional record to load (optional)
    pub fixture: Option<PathBuf>,

    /// Signed number of days to navigate away from today
    pub day_offset: i64,

    /// Slot ids to toggle on start
    pub selected_slots: Vec<u32>,
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `BOOKING_TIMEZONE` is not a known IANA timezone
    /// - `BOOKING_DAY_OFFSET` is not an integer
    /// - `BOOKING_SELECT` contains a value that is not a slot id
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a config reading each variable through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = lookup("BOOKING_TIMEZONE")
            .unwrap_or_else(|| "UTC".to_string())
            .parse::<Tz>()
            .map_err(|e| eyre!("Invalid BOOKING_TIMEZONE value: {}", e))?;

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let fixture = lookup("BOOKING_FIXTURE").map(PathBuf::from);

        let day_offset = match lookup("BOOKING_DAY_OFFSET") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .wrap_err("Invalid BOOKING_DAY_OFFSET value")?,
            None => 0,
        };

        let selected_slots = match lookup("BOOKING_SELECT") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<u32>()
                        .wrap_err_with(|| format!("Invalid slot id in BOOKING_SELECT: {}", s))
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            timezone,
            log_level,
            fixture,
            day_offset,
            selected_slots,
        })
    }

    /// Wall clock in the configured timezone
    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.timezone)
    }
}
