use crate::error::{TemporalError, TemporalResult};
use crate::scan::*;
use crate::temporal::*;

/// Read the unsigned digit run of `field` starting at `*pos`
///
/// Fractional seconds are scaled to microseconds.
#[inline]
fn scan_field(bytes: &[u8], pos: &mut usize, field: Field) -> TemporalResult<i32> {
    match bytes.get(*pos) {
        Some(b) if b.is_ascii_digit() => (),
        _ => return Err(TemporalError::InvalidFormat),
    }
    let start = *pos;
    let value = scan_integer(bytes, pos);
    let digits = *pos - start;
    if digits == 0 {
        return Err(TemporalError::InvalidFormat);
    }
    if field == Field::Microseconds {
        scale_microseconds(value, digits).ok_or(TemporalError::InvalidFormat)
    } else {
        Ok(value)
    }
}

/// Parse a date or date-time literal
///
/// Digit runs are assigned, in order, to year, month, day, hour, minute, second and
/// fractional seconds. Fields are separated by exactly one non-digit byte; the literal may
/// stop after any field. A fraction of fewer than six digits is scaled to microseconds, a
/// fraction of more than six digits is rejected.
///
/// The zero date (`0000-00-00`, optionally followed by a zero time) is handled according to
/// `zero_date`.
///
/// ```rust
/// use dbwire_parser::temporal::*;
///
/// assert_eq!(
///     parse_datetime(b"2021-06-05", ZeroDatePolicy::Fail),
///     Ok(TemporalValue::Date { year: 2021, month: 6, day: 5 })
/// );
/// assert_eq!(
///     parse_datetime(b"0000-00-00", ZeroDatePolicy::ToSentinel),
///     Ok(TemporalValue::MIN_DATE)
/// );
/// ```
pub fn parse_datetime(bytes: &[u8], zero_date: ZeroDatePolicy) -> TemporalResult<TemporalValue> {
    let mut fields: DateTimeFields = [0; 7];
    let mut cursor = FieldCursor::new(DATE_TIME_FIELDS);
    let mut pos = 0;
    while pos < bytes.len() {
        let field = cursor.current().ok_or(TemporalError::InvalidFormat)?;
        if cursor.consumed() > 0 {
            // skip separator
            pos += 1;
        }
        fields[cursor.consumed()] = scan_field(bytes, &mut pos, field)?;
        cursor.advance();
    }
    build_date_time(&fields, &cursor, zero_date)
}

/// Parse a duration literal
///
/// Digit runs are assigned, in order, to hours, minutes, seconds and fractional seconds.
/// Only the hour field carries a sign (`-` or `+`). A leading `-` marks the whole duration as
/// negative: minutes, seconds and microseconds are read as magnitudes and negated afterwards.
///
/// ```rust
/// use dbwire_parser::temporal::*;
///
/// let span = parse_duration(b"-0:20:30").unwrap();
/// assert_eq!(
///     span,
///     TemporalValue::Duration(TimeSpan { hours: 0, minutes: -20, seconds: -30, microseconds: 0 })
/// );
/// ```
pub fn parse_duration(bytes: &[u8]) -> TemporalResult<TemporalValue> {
    let mut fields: DurationFields = [0; 4];
    let mut cursor = FieldCursor::new(DURATION_FIELDS);
    let negative = bytes.first() == Some(&b'-');
    let mut pos = 0;
    if bytes.first() == Some(&b'+') {
        pos = 1;
        if !bytes.get(pos).map_or(false, u8::is_ascii_digit) {
            return Err(TemporalError::InvalidFormat);
        }
    }
    while pos < bytes.len() {
        let field = cursor.current().ok_or(TemporalError::InvalidFormat)?;
        fields[cursor.consumed()] = if field == Field::Hour {
            let start = pos;
            let hours = scan_integer(bytes, &mut pos);
            if pos == start {
                return Err(TemporalError::InvalidFormat);
            }
            hours
        } else {
            pos += 1;
            scan_field(bytes, &mut pos, field)?
        };
        cursor.advance();
    }
    build_duration(&fields, &cursor, negative)
}
