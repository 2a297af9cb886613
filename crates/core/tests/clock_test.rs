use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use findpro_core::clock::{Clock, FixedClock, SystemClock};

#[test]
fn test_fixed_clock_returns_its_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    assert_eq!(FixedClock(date).today(), date);
}

#[test]
fn test_system_clock_defaults_to_utc() {
    let clock = SystemClock::default();
    assert_eq!(clock.timezone(), Tz::UTC);

    let before = Utc::now().date_naive();
    let today = clock.today();
    let after = Utc::now().date_naive();
    assert!(before <= today && today <= after);
}

#[test]
fn test_system_clock_is_within_a_day_of_utc() {
    let clock = SystemClock::new(Tz::Pacific__Kiritimati);
    let utc = Utc::now().date_naive();

    let diff = (clock.today() - utc).num_days().abs();
    assert!(diff <= 1);
}
