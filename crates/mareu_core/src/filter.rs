//! Meeting filter state and application.
//!
//! # Responsibility
//! - Hold the active place/date-range predicate.
//! - Derive the filtered, date-sorted view over a meeting snapshot.
//!
//! # Invariants
//! - Filtering never mutates the input slice.
//! - Place matching is an exact, case-sensitive substring test.
//! - Date bounds are inclusive; an absent bound is open.
//! - Output is sorted ascending by date; equal dates keep input order.

use crate::model::meeting::Meeting;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Active list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingFilter {
    /// Substring the place name must contain.
    pub place: Option<String>,
    /// Inclusive lower bound on the meeting date.
    pub start: Option<NaiveDateTime>,
    /// Inclusive upper bound on the meeting date.
    pub end: Option<NaiveDateTime>,
}

impl MeetingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, place: &str) -> Self {
        self.place = normalize_place_filter(place);
        self
    }

    pub fn with_range(mut self, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Returns whether no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.place.is_none() && self.start.is_none() && self.end.is_none()
    }

    /// Returns whether both bounds are set and `start > end`.
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    pub fn matches(&self, meeting: &Meeting) -> bool {
        if let Some(place) = self.place.as_deref() {
            if !meeting.place.contains(place) {
                return false;
            }
        }
        if let Some(start) = self.start {
            if meeting.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if meeting.date > end {
                return false;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Maps raw place filter input to filter state; blank input clears it.
pub fn normalize_place_filter(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns the meetings accepted by `filter`, sorted ascending by date.
pub fn apply_filter(meetings: &[Meeting], filter: &MeetingFilter) -> Vec<Meeting> {
    let mut selected: Vec<Meeting> = meetings
        .iter()
        .filter(|meeting| filter.matches(meeting))
        .cloned()
        .collect();
    selected.sort_by_key(|meeting| meeting.date);
    selected
}

#[cfg(test)]
mod tests {
    use super::{apply_filter, normalize_place_filter, MeetingFilter};
    use crate::model::meeting::Meeting;
    use crate::model::place::Place;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn meeting(subject: &str, place: &str, date: NaiveDateTime) -> Meeting {
        Meeting::new(subject, Place::new(place).unwrap(), date)
    }

    #[test]
    fn empty_filter_sorts_everything_by_date() {
        let meetings = vec![
            meeting("late", "Room A", at(3, 9)),
            meeting("early", "Room B", at(1, 9)),
            meeting("middle", "Room C", at(2, 9)),
        ];
        let subjects: Vec<_> = apply_filter(&meetings, &MeetingFilter::new())
            .into_iter()
            .map(|m| m.subject)
            .collect();
        assert_eq!(subjects, vec!["early", "middle", "late"]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let meetings = vec![
            meeting("first", "Room A", at(1, 9)),
            meeting("second", "Room B", at(1, 9)),
        ];
        let subjects: Vec<_> = apply_filter(&meetings, &MeetingFilter::new())
            .into_iter()
            .map(|m| m.subject)
            .collect();
        assert_eq!(subjects, vec!["first", "second"]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let meetings = vec![meeting("x", "Room A", at(2, 9))];
        let filter = MeetingFilter::new().with_range(Some(at(3, 0)), Some(at(1, 0)));
        assert!(filter.has_inverted_range());
        assert!(apply_filter(&meetings, &filter).is_empty());
    }

    #[test]
    fn blank_place_filter_is_absent() {
        assert_eq!(normalize_place_filter("   "), None);
        assert_eq!(
            normalize_place_filter(" Room "),
            Some("Room".to_string())
        );
        assert!(MeetingFilter::new().with_place("").is_empty());
    }

    #[test]
    fn clear_resets_every_predicate() {
        let mut filter = MeetingFilter::new()
            .with_place("Room")
            .with_range(Some(at(1, 0)), None);
        filter.clear();
        assert!(filter.is_empty());
    }
}
