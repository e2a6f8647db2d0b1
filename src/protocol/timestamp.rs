//! Timestamp formatting
//!
//! Converts local date-times (`YYYY-MM-DDTHH:MM`) into the 12-digit
//! `YYYYMMDDHHMM` form carried by the `D` and `O` fields.

use chrono::NaiveDateTime;

/// Output layout of a PMS timestamp
const PMS_FORMAT: &str = "%Y%m%d%H%M";

/// Accepted input layouts, most common first
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Length of a formatted PMS timestamp
pub const PMS_TIMESTAMP_LEN: usize = 12;

/// Byte layout of `YYYY-MM-DDTHH:MM`: `d` digit, `T` date/time separator
const ISO_SHAPE: &[u8; 16] = b"dddd-dd-ddTdd:dd";

/// True if `input` has zero-padded ISO date, hour and minute (and seconds, if any)
fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < ISO_SHAPE.len() {
        return false;
    }

    let head_ok = ISO_SHAPE.iter().zip(bytes).all(|(&want, &got)| match want {
        b'd' => got.is_ascii_digit(),
        b'T' => got == b'T' || got == b' ',
        _ => got == want,
    });

    // Optional `:SS`, optionally followed by `.fraction`
    let tail_ok = match &bytes[ISO_SHAPE.len()..] {
        [] => true,
        [b':', s1, s2, rest @ ..] => {
            s1.is_ascii_digit() && s2.is_ascii_digit() && (rest.is_empty() || rest[0] == b'.')
        }
        _ => false,
    };

    head_ok && tail_ok
}

/// Parse a local date-time without timezone
///
/// Fields must be zero-padded; surrounding whitespace is not accepted.
pub fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    if !has_iso_shape(input) {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Format a local date-time string as `YYYYMMDDHHMM`
///
/// Returns `None` when the input is not a valid date-time; callers treat
/// that the same as a missing field.
pub fn format_pms_timestamp(input: &str) -> Option<String> {
    let parsed = parse_local_datetime(input)?;
    let formatted = parsed.format(PMS_FORMAT).to_string();

    // Years outside 0..=9999 would not fit the fixed width
    (formatted.len() == PMS_TIMESTAMP_LEN).then_some(formatted)
}
