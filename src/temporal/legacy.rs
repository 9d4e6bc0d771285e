//! Delimiter-splitting decoder, used as a reference
//!
//! These functions convert the bytes to text, split on the delimiter characters and parse
//! every part on its own. They implement the same contract as
//! [`parse_datetime`](../fn.parse_datetime.html) and [`parse_duration`](../fn.parse_duration.html)
//! and must produce the same values for any valid literal. They allocate and are not meant
//! for production decoding.

use crate::error::{TemporalError, TemporalResult};
use crate::scan::*;
use crate::temporal::*;
use std::str;

fn parse_magnitude(part: &str, field: Field) -> TemporalResult<i32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemporalError::InvalidFormat);
    }
    let value: i32 = part.parse().or(Err(TemporalError::InvalidFormat))?;
    if field == Field::Microseconds {
        // pad on the right: "5" is 500000
        if part.len() > 6 {
            return Err(TemporalError::InvalidFormat);
        }
        Ok(value * 10_i32.pow(6 - part.len() as u32))
    } else {
        Ok(value)
    }
}

/// Parse a date or date-time literal by splitting it on `-`, ` `, `:` and `.`
pub fn legacy_parse_datetime(
    bytes: &[u8],
    zero_date: ZeroDatePolicy,
) -> TemporalResult<TemporalValue> {
    let text = str::from_utf8(bytes).or(Err(TemporalError::InvalidFormat))?;
    let parts: Vec<&str> = text.split(&['-', ' ', ':', '.'][..]).collect();
    if parts.len() > DATE_TIME_FIELDS.len() {
        return Err(TemporalError::InvalidFormat);
    }
    let mut fields: DateTimeFields = [0; 7];
    let mut cursor = FieldCursor::new(DATE_TIME_FIELDS);
    if !text.is_empty() {
        for (idx, part) in parts.iter().enumerate() {
            fields[idx] = parse_magnitude(part, DATE_TIME_FIELDS[idx])?;
            cursor.advance();
        }
    }
    build_date_time(&fields, &cursor, zero_date)
}

/// Parse a duration literal by splitting it on `:` and `.`
///
/// The hour part is parsed as a signed integer; the remaining parts are magnitudes, negated
/// when the text starts with `-`.
pub fn legacy_parse_duration(bytes: &[u8]) -> TemporalResult<TemporalValue> {
    let text = str::from_utf8(bytes).or(Err(TemporalError::InvalidFormat))?;
    let negative = text.starts_with('-');
    let parts: Vec<&str> = text.split(&[':', '.'][..]).collect();
    if parts.len() > DURATION_FIELDS.len() {
        return Err(TemporalError::InvalidFormat);
    }
    let mut fields: DurationFields = [0; 4];
    let mut cursor = FieldCursor::new(DURATION_FIELDS);
    if !text.is_empty() {
        fields[0] = parts[0].parse().or(Err(TemporalError::InvalidFormat))?;
        cursor.advance();
        for (idx, part) in parts.iter().enumerate().skip(1) {
            fields[idx] = parse_magnitude(part, DURATION_FIELDS[idx])?;
            cursor.advance();
        }
    }
    build_duration(&fields, &cursor, negative)
}
