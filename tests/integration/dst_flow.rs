use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use chronoadapt::{ChronoAssumption, MappingConfig, Resolution, adapt_to_target};

fn transparent_target() -> ChronoAssumption {
    ChronoAssumption::new(Resolution::microseconds(1))
}

#[test]
fn spring_forward_gap_resolves_by_zone_rule() {
    // 02:30 does not exist in Berlin on 2023-03-26; the zone rule carries it
    // across the gap to 03:30 CEST.
    let config = MappingConfig {
        source: ChronoAssumption {
            implicit_timezone: Some(Tz::Europe__Berlin),
            ..ChronoAssumption::new(Resolution::seconds(1))
        },
        target: transparent_target(),
        is_gas: None,
    };
    let value = NaiveDate::from_ymd_opt(2023, 3, 26)
        .expect("valid date")
        .and_hms_opt(2, 30, 0)
        .expect("valid time");
    let adapted = adapt_to_target(value, &config).expect("adapts");
    assert_eq!(adapted, Utc.with_ymd_and_hms(2023, 3, 26, 1, 30, 0).unwrap());
}

#[test]
fn fall_back_ambiguity_resolves_to_the_earliest_instant() {
    let config = MappingConfig {
        source: ChronoAssumption {
            implicit_timezone: Some(Tz::Europe__Berlin),
            ..ChronoAssumption::new(Resolution::seconds(1))
        },
        target: transparent_target(),
        is_gas: None,
    };
    let value = NaiveDate::from_ymd_opt(2023, 10, 29)
        .expect("valid date")
        .and_hms_opt(2, 30, 0)
        .expect("valid time");
    let adapted = adapt_to_target(value, &config).expect("adapts");
    assert_eq!(
        adapted,
        Utc.with_ymd_and_hms(2023, 10, 29, 0, 30, 0).unwrap()
    );
}

#[test]
fn gas_day_shift_is_six_utc_hours_away_from_transitions() {
    let config = MappingConfig {
        source: ChronoAssumption {
            is_end: true,
            is_inclusive_end: Some(false),
            is_gastag_aware: true,
            ..ChronoAssumption::new(Resolution::days(1))
        },
        target: transparent_target(),
        is_gas: Some(true),
    };
    let value = Utc.with_ymd_and_hms(2021, 5, 31, 4, 0, 0).unwrap();
    let adapted = adapt_to_target(value, &config).expect("adapts");
    assert_eq!(adapted, Utc.with_ymd_and_hms(2021, 5, 30, 22, 0, 0).unwrap());
}

#[test]
fn gas_day_shift_shrinks_to_five_utc_hours_across_spring_forward() {
    // The shift is six hours on the Berlin clock; on 2023-03-26 those six
    // local hours span only five UTC hours.
    let config = MappingConfig {
        source: ChronoAssumption {
            is_end: true,
            is_inclusive_end: Some(false),
            is_gastag_aware: true,
            ..ChronoAssumption::new(Resolution::days(1))
        },
        target: transparent_target(),
        is_gas: Some(true),
    };
    let value = Utc.with_ymd_and_hms(2023, 3, 26, 4, 0, 0).unwrap();
    let adapted = adapt_to_target(value, &config).expect("adapts");
    assert_eq!(
        adapted,
        Utc.with_ymd_and_hms(2023, 3, 25, 23, 0, 0).unwrap()
    );
}

#[test]
fn inclusive_day_end_survives_the_23_hour_day() {
    // The interval ending at 2021-03-29T00:00 Berlin has the 23-hour DST day
    // 2021-03-28 as its last day; the inclusive end must name that day.
    let config = MappingConfig {
        source: ChronoAssumption {
            is_end: true,
            is_inclusive_end: Some(false),
            implicit_timezone: Some(Tz::Europe__Berlin),
            ..ChronoAssumption::new(Resolution::days(1))
        },
        target: ChronoAssumption {
            is_end: true,
            is_inclusive_end: Some(true),
            implicit_timezone: Some(Tz::Europe__Berlin),
            ..ChronoAssumption::new(Resolution::days(1))
        },
        is_gas: None,
    };
    let value = NaiveDate::from_ymd_opt(2021, 3, 29).expect("valid date");
    let adapted = adapt_to_target(value, &config).expect("adapts");
    assert_eq!(
        adapted,
        Tz::Europe__Berlin
            .with_ymd_and_hms(2021, 3, 28, 0, 0, 0)
            .single()
            .expect("unambiguous local time")
    );
}
