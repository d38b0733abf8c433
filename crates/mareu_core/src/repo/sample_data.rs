//! Sample meetings for demo sessions.
//!
//! Dates are laid out relative to an anchor day so a fresh session always
//! shows upcoming meetings.

use crate::model::meeting::{Meeting, MeetingValidationError};
use crate::model::person::Person;
use crate::model::place::Place;
use chrono::{Days, NaiveDate, NaiveDateTime};

struct SampleMeeting {
    subject: &'static str,
    place: &'static str,
    day_offset: u64,
    hour: u32,
    minute: u32,
    participants: &'static [&'static str],
}

const SAMPLE_MEETINGS: &[SampleMeeting] = &[
    SampleMeeting {
        subject: "Meeting A",
        place: "Room A",
        day_offset: 0,
        hour: 14,
        minute: 0,
        participants: &["maxime@lamzone.com", "alex@lamzone.com"],
    },
    SampleMeeting {
        subject: "Meeting B",
        place: "Room B",
        day_offset: 0,
        hour: 16,
        minute: 0,
        participants: &["paul@lamzone.com", "viviane@lamzone.com"],
    },
    SampleMeeting {
        subject: "Meeting C",
        place: "Room C",
        day_offset: 1,
        hour: 9,
        minute: 30,
        participants: &["amandine@lamzone.com", "luc@lamzone.com"],
    },
    SampleMeeting {
        subject: "Sprint review",
        place: "Room A",
        day_offset: 2,
        hour: 11,
        minute: 0,
        participants: &[
            "maxime@lamzone.com",
            "paul@lamzone.com",
            "amandine@lamzone.com",
        ],
    },
    SampleMeeting {
        subject: "Budget",
        place: "Room J",
        day_offset: 7,
        hour: 10,
        minute: 15,
        participants: &["viviane@lamzone.com"],
    },
];

/// Builds the sample meetings anchored on `anchor`.
///
/// Entries whose date would overflow the calendar are skipped.
pub fn sample_meetings(anchor: NaiveDate) -> Result<Vec<Meeting>, MeetingValidationError> {
    let mut meetings = Vec::with_capacity(SAMPLE_MEETINGS.len());
    for sample in SAMPLE_MEETINGS {
        let Some(date) = sample_date(anchor, sample) else {
            continue;
        };
        let participants = sample
            .participants
            .iter()
            .map(Person::new)
            .collect::<Result<Vec<_>, _>>()?;
        let meeting = Meeting::new(sample.subject, Place::new(sample.place)?, date)
            .with_participants(participants);
        meeting.validate()?;
        meetings.push(meeting);
    }
    Ok(meetings)
}

fn sample_date(anchor: NaiveDate, sample: &SampleMeeting) -> Option<NaiveDateTime> {
    anchor
        .checked_add_days(Days::new(sample.day_offset))?
        .and_hms_opt(sample.hour, sample.minute, 0)
}
