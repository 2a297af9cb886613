use std::{collections::HashMap, path::PathBuf};

use chrono_tz::Tz;
use findpro_core::config::BookingConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<BookingConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    BookingConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.timezone, Tz::UTC);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.fixture, None);
    assert_eq!(config.day_offset, 0);
    assert!(config.selected_slots.is_empty());
}

#[test]
fn test_all_values() {
    let config = config_from(&[
        ("BOOKING_TIMEZONE", "Europe/Berlin"),
        ("LOG_LEVEL", "debug"),
        ("BOOKING_FIXTURE", "fixtures/pro.json"),
        ("BOOKING_DAY_OFFSET", "-2"),
        ("BOOKING_SELECT", "30, 60,,90"),
    ])
    .unwrap();

    assert_eq!(config.timezone, Tz::Europe__Berlin);
    assert_eq!(config.clock().timezone(), Tz::Europe__Berlin);
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.fixture, Some(PathBuf::from("fixtures/pro.json")));
    assert_eq!(config.day_offset, -2);
    assert_eq!(config.selected_slots, vec![30, 60, 90]);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = config_from(&[("LOG_LEVEL", "loud")]).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_invalid_timezone() {
    let err = config_from(&[("BOOKING_TIMEZONE", "Mars/Olympus")]).unwrap_err();

    assert!(err.to_string().contains("Invalid BOOKING_TIMEZONE value"));
}

#[test]
fn test_invalid_day_offset() {
    let err = config_from(&[("BOOKING_DAY_OFFSET", "tomorrow")]).unwrap_err();

    assert!(err.to_string().contains("Invalid BOOKING_DAY_OFFSET value"));
}

#[test]
fn test_invalid_slot_id() {
    let err = config_from(&[("BOOKING_SELECT", "30,noon")]).unwrap_err();

    assert!(err.to_string().contains("Invalid slot id in BOOKING_SELECT: noon"));
}
