//! Timestamp Tests
//!
//! Tests for local date-time to PMS timestamp conversion.

use pmsbridge::protocol::{format_pms_timestamp, parse_local_datetime, PMS_TIMESTAMP_LEN};

#[test]
fn test_format_basic() {
    assert_eq!(
        format_pms_timestamp("2021-01-05T09:30").as_deref(),
        Some("202101050930")
    );
}

#[test]
fn test_format_reference_dates() {
    assert_eq!(
        format_pms_timestamp("2020-12-20T12:00").as_deref(),
        Some("202012201200")
    );
    assert_eq!(
        format_pms_timestamp("2020-12-30T21:00").as_deref(),
        Some("202012302100")
    );
}

#[test]
fn test_format_with_seconds_and_fraction() {
    assert_eq!(
        format_pms_timestamp("2021-01-05T09:30:15").as_deref(),
        Some("202101050930")
    );
    assert_eq!(
        format_pms_timestamp("2021-01-05T09:30:15.250").as_deref(),
        Some("202101050930")
    );
}

#[test]
fn test_format_space_separator() {
    assert_eq!(
        format_pms_timestamp("2021-01-05 09:30").as_deref(),
        Some("202101050930")
    );
}

#[test]
fn test_output_is_twelve_digits() {
    let formatted = format_pms_timestamp("1999-02-03T04:05").unwrap();
    assert_eq!(formatted.len(), PMS_TIMESTAMP_LEN);
    assert!(formatted.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn test_missing_time_is_absent() {
    assert_eq!(format_pms_timestamp("2021-01-05"), None);
}

#[test]
fn test_invalid_inputs_are_absent() {
    for input in [
        "",
        "not a date",
        "2021-13-05T09:30",
        "2021-02-30T09:30",
        "2021-01-05T25:00",
        "05/01/2021 09:30",
        "2021-01-05T09:30+02:00",
        "2021-01-05T09:30Z",
    ] {
        assert_eq!(format_pms_timestamp(input), None, "input {:?}", input);
    }
}

#[test]
fn test_unpadded_or_padded_inputs_are_absent() {
    for input in [
        "2021-01-05T9:30",
        "2021-01-05T09:5",
        "2021-1-05T09:30",
        "2021-01-05T09:30:7",
        " 2021-01-05T09:30",
        "2021-01-05T09:30 ",
    ] {
        assert_eq!(format_pms_timestamp(input), None, "input {:?}", input);
    }
}

#[test]
fn test_parse_local_datetime() {
    let parsed = parse_local_datetime("2024-02-29T23:59").unwrap();
    assert_eq!(parsed.to_string(), "2024-02-29 23:59:00");
}
