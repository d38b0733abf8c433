use chrono::{NaiveDate, NaiveDateTime};
use mareu_core::{
    apply_filter, parse_filter_bound, BoundSide, InMemoryMeetingRepository, Meeting,
    MeetingFilter, MeetingRepository, MeetingService, Place,
};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn fixtures() -> Vec<Meeting> {
    vec![
        Meeting::new("Budget", Place::new("Room B").unwrap(), at(9, 10, 0)),
        Meeting::new("Kickoff", Place::new("Room A").unwrap(), at(7, 9, 0)),
        Meeting::new("Retro", Place::new("Room A2").unwrap(), at(8, 17, 30)),
        Meeting::new("Lunch", Place::new("Cafeteria").unwrap(), at(8, 12, 0)),
        Meeting::new("Sync", Place::new("room a").unwrap(), at(10, 8, 0)),
    ]
}

fn subjects(meetings: &[Meeting]) -> Vec<&str> {
    meetings.iter().map(|m| m.subject.as_str()).collect()
}

#[test]
fn place_filter_keeps_only_matching_substrings() {
    let meetings = fixtures();
    let filtered = apply_filter(&meetings, &MeetingFilter::new().with_place("Room A"));

    assert!(filtered.iter().all(|m| m.place.name().contains("Room A")));
    assert_eq!(subjects(&filtered), vec!["Kickoff", "Retro"]);
}

#[test]
fn date_range_is_inclusive_and_sorted() {
    let meetings = fixtures();
    let filter = MeetingFilter::new().with_range(Some(at(8, 12, 0)), Some(at(9, 10, 0)));
    let filtered = apply_filter(&meetings, &filter);

    assert_eq!(subjects(&filtered), vec!["Lunch", "Retro", "Budget"]);
    assert!(filtered.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn open_bounds_extend_to_either_side() {
    let meetings = fixtures();

    let from = MeetingFilter::new().with_range(Some(at(9, 0, 0)), None);
    assert_eq!(subjects(&apply_filter(&meetings, &from)), vec!["Budget", "Sync"]);

    let until = MeetingFilter::new().with_range(None, Some(at(7, 9, 0)));
    assert_eq!(subjects(&apply_filter(&meetings, &until)), vec!["Kickoff"]);
}

#[test]
fn date_only_bounds_cover_whole_days() {
    let meetings = fixtures();
    let start = parse_filter_bound("08/10/2024", BoundSide::Start).unwrap();
    let end = parse_filter_bound("08/10/2024", BoundSide::End).unwrap();
    let filtered = apply_filter(&meetings, &MeetingFilter::new().with_range(start, end));

    assert_eq!(subjects(&filtered), vec!["Lunch", "Retro"]);
}

#[test]
fn place_and_range_combine() {
    let meetings = fixtures();
    let filter = MeetingFilter::new()
        .with_place("Room")
        .with_range(Some(at(8, 0, 0)), None);
    assert_eq!(subjects(&apply_filter(&meetings, &filter)), vec!["Retro", "Budget"]);
}

#[test]
fn filtering_never_mutates_the_store() {
    let repo = InMemoryMeetingRepository::new();
    repo.seed(fixtures()).unwrap();
    let before = repo.list_meetings().unwrap();

    let mut service = MeetingService::new(repo.clone());
    service.set_place_filter("Cafeteria");
    assert_eq!(subjects(&service.filtered_meetings().unwrap()), vec!["Lunch"]);

    assert_eq!(repo.list_meetings().unwrap(), before);
    assert_eq!(service.all_meetings().unwrap().len(), 5);

    service.clear_filters();
    assert!(service.filter().is_empty());
    assert_eq!(service.filtered_meetings().unwrap().len(), 5);
}
