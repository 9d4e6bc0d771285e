//! Compare the single-pass decoders with the delimiter-splitting reference

#[macro_use]
extern crate pretty_assertions;
extern crate dbwire_parser;

use chrono::{Datelike, Duration, NaiveDate, Timelike};
use dbwire_parser::error::TemporalResult;
use dbwire_parser::temporal::legacy::*;
use dbwire_parser::temporal::*;

type DateTimeDecoder = fn(&[u8], ZeroDatePolicy) -> TemporalResult<TemporalValue>;
type DurationDecoder = fn(&[u8]) -> TemporalResult<TemporalValue>;

const DATE_TIME_DECODERS: [(&str, DateTimeDecoder); 2] = [
    ("single pass", parse_datetime),
    ("legacy", legacy_parse_datetime),
];

const DURATION_DECODERS: [(&str, DurationDecoder); 2] = [
    ("single pass", parse_duration),
    ("legacy", legacy_parse_duration),
];

/// Append `digits` fractional digits of `micros` (truncating)
fn push_fraction(text: &mut String, micros: u32, digits: usize) {
    if digits > 0 {
        let fraction = format!("{:06}", micros);
        text.push('.');
        text.push_str(&fraction[..digits]);
    }
}

fn truncated(micros: u32, digits: usize) -> u32 {
    let unit = 10_u32.pow(6 - digits as u32);
    micros / unit * unit
}

fn check_datetime(text: &str, expected: TemporalValue) {
    for (name, decoder) in DATE_TIME_DECODERS.iter() {
        assert_eq!(
            decoder(text.as_bytes(), ZeroDatePolicy::Fail),
            Ok(expected),
            "{} decoder, input {:?}",
            name,
            text
        );
    }
}

fn check_duration(text: &str, expected: TemporalValue) {
    for (name, decoder) in DURATION_DECODERS.iter() {
        assert_eq!(
            decoder(text.as_bytes()),
            Ok(expected),
            "{} decoder, input {:?}",
            name,
            text
        );
    }
}

#[test]
fn test_differential_datetime() {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_micro_opt(0, 0, 0, 0))
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2021, 1, 2)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    // prime step, so that every field takes many values
    let step = Duration::seconds(3_607) + Duration::microseconds(123_457);
    let mut current = start;
    let mut count = 0;
    while current < end {
        let base = format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            current.year(),
            current.month(),
            current.day(),
            current.hour(),
            current.minute(),
            current.second()
        );
        let micros = current.nanosecond() / 1_000;
        for digits in 0..=6 {
            let mut text = base.clone();
            push_fraction(&mut text, micros, digits);
            let expected = TemporalValue::DateTime {
                year: current.year(),
                month: current.month(),
                day: current.day(),
                hour: current.hour(),
                minute: current.minute(),
                second: current.second(),
                microsecond: truncated(micros, digits),
            };
            check_datetime(&text, expected);
        }
        let date = &base[..10];
        check_datetime(
            date,
            TemporalValue::Date {
                year: current.year(),
                month: current.month(),
                day: current.day(),
            },
        );
        current += step;
        count += 1;
    }
    assert!(count > 8_000);
}

#[test]
fn test_differential_duration() {
    let limit: i64 = 24 * 3_600 * 1_000_000;
    // 61.000 123 seconds
    let step: i64 = 61_000_123;
    let mut total = -limit;
    while total <= limit {
        let negative = total < 0;
        let magnitude = total.abs();
        let hours = magnitude / 3_600_000_000;
        let minutes = magnitude / 60_000_000 % 60;
        let seconds = magnitude / 1_000_000 % 60;
        let micros = (magnitude % 1_000_000) as u32;
        let base = format!(
            "{}{:02}:{:02}:{:02}",
            if negative { "-" } else { "" },
            hours,
            minutes,
            seconds
        );
        let sign = if negative { -1 } else { 1 };
        for digits in 0..=6 {
            let mut text = base.clone();
            push_fraction(&mut text, micros, digits);
            let expected = TemporalValue::Duration(TimeSpan {
                hours: sign * hours as i32,
                minutes: sign * minutes as i32,
                seconds: sign * seconds as i32,
                microseconds: sign * truncated(micros, digits) as i32,
            });
            check_duration(&text, expected);
        }
        total += step;
    }
}

#[test]
fn test_differential_sentinel() {
    for text in &["0000-00-00", "0000-00-00 00:00:00", "0000-00-00 00:00:00.0"] {
        for (name, decoder) in DATE_TIME_DECODERS.iter() {
            assert_eq!(
                decoder(text.as_bytes(), ZeroDatePolicy::ToSentinel),
                Ok(TemporalValue::MIN_DATE),
                "{} decoder, input {:?}",
                name,
                text
            );
        }
    }
}
