//! Textual date/time and duration literals
//!
//! Text result rows carry temporal columns as ASCII literals: `2021-06-05`,
//! `2021-06-05 04:03:02.123` or, for durations, `-10:20:30.5`. The functions of this module
//! turn them into a [`TemporalValue`](enum.TemporalValue.html).
//!
//! Two implementations of the same contract are provided:
//!
//! - [`parse_datetime`](fn.parse_datetime.html) and [`parse_duration`](fn.parse_duration.html)
//!   scan the bytes once, without allocating;
//! - [`legacy::legacy_parse_datetime`](legacy/fn.legacy_parse_datetime.html) and
//!   [`legacy::legacy_parse_duration`](legacy/fn.legacy_parse_duration.html) split the text on
//!   delimiters and parse every part independently. They are kept as a reference for
//!   differential testing only.
//!
//! Both share the value construction functions of this module, so that the calendar checks,
//! zero-date handling and sign rules are identical.

use crate::error::{TemporalError, TemporalResult};
use crate::scan::{Field, FieldCursor};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

pub mod legacy;
mod parser;

pub use crate::temporal::parser::*;

/// Behavior when decoding the zero date `0000-00-00`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroDatePolicy {
    /// Return [`TemporalValue::MIN_DATE`](enum.TemporalValue.html#associatedconstant.MIN_DATE)
    ToSentinel,
    /// Fail with `InvalidFormat`
    Fail,
}

/// Signed duration, as sent for `TIME` columns
///
/// Hours are not bounded to a day. For negative durations every non-zero field is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSpan {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub microseconds: i32,
}

impl TimeSpan {
    /// Total length of the span in microseconds
    pub fn total_microseconds(&self) -> i64 {
        let seconds = (i64::from(self.hours) * 60 + i64::from(self.minutes)) * 60
            + i64::from(self.seconds);
        seconds * 1_000_000 + i64::from(self.microseconds)
    }

    pub fn to_chrono(&self) -> chrono::Duration {
        chrono::Duration::microseconds(self.total_microseconds())
    }

    pub fn is_negative(&self) -> bool {
        self.total_microseconds() < 0
    }
}

/// Decoded temporal literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date {
        year: i32,
        month: u32,
        day: u32,
    },
    DateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        /// Always in `0..=999_999`
        microsecond: u32,
    },
    Duration(TimeSpan),
}

impl TemporalValue {
    /// Sentinel returned for zero dates under [`ZeroDatePolicy::ToSentinel`](enum.ZeroDatePolicy.html)
    pub const MIN_DATE: TemporalValue = TemporalValue::Date {
        year: 1,
        month: 1,
        day: 1,
    };

    /// Calendar date of a `Date` or `DateTime` value
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        match *self {
            TemporalValue::Date { year, month, day }
            | TemporalValue::DateTime {
                year, month, day, ..
            } => NaiveDate::from_ymd_opt(year, month, day),
            TemporalValue::Duration(_) => None,
        }
    }

    /// Date and time of a `Date` (at midnight) or `DateTime` value
    pub fn as_naive_datetime(&self) -> Option<NaiveDateTime> {
        match *self {
            TemporalValue::Date { .. } => self.as_naive_date()?.and_hms_opt(0, 0, 0),
            TemporalValue::DateTime {
                hour,
                minute,
                second,
                microsecond,
                ..
            } => self
                .as_naive_date()?
                .and_hms_micro_opt(hour, minute, second, microsecond),
            TemporalValue::Duration(_) => None,
        }
    }

    pub fn as_time_span(&self) -> Option<&TimeSpan> {
        match self {
            TemporalValue::Duration(span) => Some(span),
            _ => None,
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TemporalValue::Date { year, month, day } => {
                write!(f, "{:04}-{:02}-{:02}", year, month, day)
            }
            TemporalValue::DateTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
                microsecond,
            } => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                year, month, day, hour, minute, second, microsecond
            ),
            TemporalValue::Duration(span) => {
                let sign = if span.is_negative() { "-" } else { "" };
                write!(
                    f,
                    "{}{:02}:{:02}:{:02}.{:06}",
                    sign,
                    span.hours.unsigned_abs(),
                    span.minutes.unsigned_abs(),
                    span.seconds.unsigned_abs(),
                    span.microseconds.unsigned_abs()
                )
            }
        }
    }
}

/// Field values of a date-time literal, indexed like `scan::DATE_TIME_FIELDS`
pub(crate) type DateTimeFields = [i32; 7];

/// Field values of a duration literal, indexed like `scan::DURATION_FIELDS`
pub(crate) type DurationFields = [i32; 4];

#[inline]
fn to_u32(v: i32) -> TemporalResult<u32> {
    if v < 0 {
        Err(TemporalError::InvalidFormat)
    } else {
        Ok(v as u32)
    }
}

/// Build a date or date-time value from the filled fields
///
/// Fields the cursor did not reach are zero. The last filled field selects the variant:
/// up to `Day` a `Date`, past `Day` a `DateTime` (with zero microseconds unless the fraction
/// was filled).
pub(crate) fn build_date_time(
    fields: &DateTimeFields,
    cursor: &FieldCursor,
    policy: ZeroDatePolicy,
) -> TemporalResult<TemporalValue> {
    if cursor.consumed() == 0 {
        return Err(TemporalError::InvalidFormat);
    }
    let [year, month, day, hour, minute, second, microsecond] = *fields;
    if year == 0 && month == 0 && day == 0 && fields[3..].iter().all(|&v| v == 0) {
        return match policy {
            ZeroDatePolicy::ToSentinel => Ok(TemporalValue::MIN_DATE),
            ZeroDatePolicy::Fail => Err(TemporalError::InvalidFormat),
        };
    }
    let (month, day) = (to_u32(month)?, to_u32(day)?);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TemporalError::InvalidFormat)?;
    if !cursor.has_passed(Field::Hour) {
        return Ok(TemporalValue::Date { year, month, day });
    }
    let (hour, minute, second, microsecond) = (
        to_u32(hour)?,
        to_u32(minute)?,
        to_u32(second)?,
        to_u32(microsecond)?,
    );
    if microsecond > 999_999 {
        return Err(TemporalError::InvalidFormat);
    }
    NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond)
        .ok_or(TemporalError::InvalidFormat)?;
    Ok(TemporalValue::DateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        microsecond,
    })
}

/// Build a duration from the filled fields
///
/// `fields` holds the hour as parsed (with its sign) and the other fields as magnitudes.
/// When `negative` is set, the sign is applied to minutes, seconds and microseconds.
pub(crate) fn build_duration(
    fields: &DurationFields,
    cursor: &FieldCursor,
    negative: bool,
) -> TemporalResult<TemporalValue> {
    if cursor.consumed() == 0 {
        return Err(TemporalError::InvalidFormat);
    }
    let [hours, minutes, seconds, microseconds] = *fields;
    if !(0..60).contains(&minutes)
        || !(0..60).contains(&seconds)
        || !(0..=999_999).contains(&microseconds)
    {
        return Err(TemporalError::InvalidFormat);
    }
    let sign = if negative { -1 } else { 1 };
    Ok(TemporalValue::Duration(TimeSpan {
        hours,
        minutes: sign * minutes,
        seconds: sign * seconds,
        microseconds: sign * microseconds,
    }))
}
