//! Fixed-format date/time parsing and formatting.
//!
//! # Responsibility
//! - Turn user-entered text into wall-clock timestamps.
//! - Render timestamps back into the same patterns for labels and lists.
//!
//! # Invariants
//! - Parsing never panics; malformed input yields `None` or `DateParseError`.
//! - Patterns are strict: two-digit day/month/hour/minute, four-digit year.
//! - `parse_date_time(&format_date_time(d)) == Some(d)` for minute-precision `d`.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Meeting date/time pattern (`dd/MM/yyyy HH:mm`).
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";
/// Filter date pattern (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// List row time pattern (`HH:mm`).
pub const TIME_FORMAT: &str = "%H:%M";

const LAST_SECOND_OF_DAY: u32 = 24 * 60 * 60 - 1;

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}$").expect("valid date time regex")
});
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid date regex"));

/// Which side of a date range a filter bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Start,
    End,
}

/// Error for non-empty filter input that matches no accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    WrongFormat(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongFormat(value) => write!(
                f,
                "expected dd/mm/yyyy or dd/mm/yyyy hh:mm, got `{value}`"
            ),
        }
    }
}

impl Error for DateParseError {}

/// Parses a meeting date/time (`dd/MM/yyyy HH:mm`).
///
/// Returns `None` for empty, malformed or out-of-range input.
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if !DATE_TIME_RE.is_match(trimmed) {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT).ok()
}

/// Parses a calendar day (`dd/MM/yyyy`).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if !DATE_RE.is_match(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Parses one filter bound.
///
/// - Empty input means "no bound" and returns `Ok(None)`.
/// - A full date/time is used as-is.
/// - A date-only start bound opens at 00:00:00, a date-only end bound closes
///   at 23:59:59 of the same day.
pub fn parse_filter_bound(
    text: &str,
    side: BoundSide,
) -> Result<Option<NaiveDateTime>, DateParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Some(date_time) = parse_date_time(trimmed) {
        return Ok(Some(date_time));
    }

    let bound = parse_date(trimmed).and_then(|date| match side {
        BoundSide::Start => date.and_hms_opt(0, 0, 0),
        BoundSide::End => date.and_hms_opt(23, 59, 59),
    });
    bound
        .map(Some)
        .ok_or_else(|| DateParseError::WrongFormat(trimmed.to_string()))
}

pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn format_time(value: &NaiveDateTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

/// Renders a filter bound back into the shortest pattern that parses to it.
///
/// Whole-day bounds (00:00 start, 23:59:59 end) are shown date-only.
pub fn format_filter_bound(value: Option<&NaiveDateTime>, side: BoundSide) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let whole_day = value.nanosecond() == 0
        && match side {
            BoundSide::Start => value.num_seconds_from_midnight() == 0,
            BoundSide::End => value.num_seconds_from_midnight() == LAST_SECOND_OF_DAY,
        };
    if whole_day {
        format_date(&value.date())
    } else {
        format_date_time(value)
    }
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{
        format_date_time, format_filter_bound, parse_date, parse_date_time, parse_filter_bound,
        truncate_to_minute, BoundSide, DateParseError,
    };
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parse_date_time_accepts_fixed_pattern() {
        assert_eq!(
            parse_date_time("14/03/2024 09:30"),
            Some(dt(2024, 3, 14, 9, 30, 0))
        );
        assert_eq!(
            parse_date_time("  01/12/2023 23:59 "),
            Some(dt(2023, 12, 1, 23, 59, 0))
        );
    }

    #[test]
    fn parse_date_time_rejects_malformed_and_empty_input() {
        for input in [
            "",
            "   ",
            "14/03/2024",
            "4/3/2024 9:30",
            "2024-03-14 09:30",
            "31/02/2024 10:00",
            "14/13/2024 10:00",
            "14/03/2024 24:00",
            "14/03/2024 09:30:00",
            "aa/bb/cccc dd:ee",
            "١٤/٠٣/٢٠٢٤ ٠٩:٣٠",
        ] {
            assert_eq!(parse_date_time(input), None, "input `{input}`");
        }
    }

    #[test]
    fn format_then_parse_round_trips() {
        let samples = [
            dt(2024, 2, 29, 0, 0, 0),
            dt(1999, 12, 31, 23, 59, 0),
            dt(2030, 7, 4, 12, 5, 0),
        ];
        for sample in samples {
            assert_eq!(parse_date_time(&format_date_time(&sample)), Some(sample));
        }
    }

    #[test]
    fn parse_then_format_returns_the_input_text() {
        for text in [
            "01/01/2000 00:00",
            "29/02/2024 12:30",
            "31/12/2099 23:59",
            "07/08/2025 09:05",
        ] {
            let parsed = parse_date_time(text).unwrap();
            assert_eq!(format_date_time(&parsed), text);
        }
    }

    #[test]
    fn parse_date_accepts_day_only() {
        assert_eq!(
            parse_date("05/06/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 5)
        );
        assert_eq!(parse_date("5/6/2024"), None);
    }

    #[test]
    fn filter_bound_empty_means_absent() {
        assert_eq!(parse_filter_bound("", BoundSide::Start), Ok(None));
        assert_eq!(parse_filter_bound("  ", BoundSide::End), Ok(None));
    }

    #[test]
    fn filter_bound_date_only_covers_whole_day() {
        assert_eq!(
            parse_filter_bound("05/06/2024", BoundSide::Start),
            Ok(Some(dt(2024, 6, 5, 0, 0, 0)))
        );
        assert_eq!(
            parse_filter_bound("05/06/2024", BoundSide::End),
            Ok(Some(dt(2024, 6, 5, 23, 59, 59)))
        );
        assert_eq!(
            parse_filter_bound("05/06/2024 10:15", BoundSide::End),
            Ok(Some(dt(2024, 6, 5, 10, 15, 0)))
        );
    }

    #[test]
    fn filter_bound_rejects_garbage() {
        assert_eq!(
            parse_filter_bound("tomorrow", BoundSide::Start),
            Err(DateParseError::WrongFormat("tomorrow".to_string()))
        );
    }

    #[test]
    fn format_filter_bound_prefers_date_only_for_whole_days() {
        let start = dt(2024, 6, 5, 0, 0, 0);
        let end = dt(2024, 6, 5, 23, 59, 59);
        let exact = dt(2024, 6, 5, 10, 15, 0);
        assert_eq!(format_filter_bound(Some(&start), BoundSide::Start), "05/06/2024");
        assert_eq!(format_filter_bound(Some(&end), BoundSide::End), "05/06/2024");
        assert_eq!(
            format_filter_bound(Some(&exact), BoundSide::End),
            "05/06/2024 10:15"
        );
        assert_eq!(format_filter_bound(None, BoundSide::Start), "");
    }

    #[test]
    fn truncate_to_minute_drops_seconds() {
        assert_eq!(
            truncate_to_minute(dt(2024, 1, 1, 8, 30, 45)),
            dt(2024, 1, 1, 8, 30, 0)
        );
    }
}
