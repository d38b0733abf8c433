//! Registration form validation.
//!
//! # Responsibility
//! - Turn raw registration input into a validated `NewMeeting`.
//! - Report every invalid field at once, as user-facing field errors.
//!
//! # Invariants
//! - Validation never panics and never touches the store.
//! - An empty date is reported as `Empty`, a non-empty malformed one as
//!   `WrongFormat`; both block the save.

use crate::datetime::parse_date_time;
use crate::model::meeting::{Meeting, MeetingValidationError};
use crate::model::person::Person;
use crate::model::place::Place;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PERSON_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\s]+").expect("valid person separator regex"));

/// Raw registration input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub subject: String,
    pub place: String,
    /// Expected as `dd/MM/yyyy HH:mm`.
    pub date: String,
    /// Raw email entries.
    pub persons: Vec<String>,
}

/// Validated registration input, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeeting {
    pub subject: String,
    pub place: Place,
    pub date: NaiveDateTime,
    pub participants: BTreeSet<Person>,
}

impl NewMeeting {
    pub fn into_meeting(self) -> Meeting {
        Meeting::new(self.subject, self.place, self.date).with_participants(self.participants)
    }
}

/// Registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeetingField {
    Subject,
    Place,
    Date,
    Persons,
}

impl MeetingField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Place => "place",
            Self::Date => "date",
            Self::Persons => "persons",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    Empty,
    WrongFormat,
    InvalidEmail(String),
}

/// One user-visible validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: MeetingField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: MeetingField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        match (&self.kind, self.field) {
            (FieldErrorKind::Empty, MeetingField::Subject) => "Subject is required".to_string(),
            (FieldErrorKind::Empty, MeetingField::Place) => "Place is required".to_string(),
            (FieldErrorKind::Empty, MeetingField::Date) => "Date is required".to_string(),
            (FieldErrorKind::Empty, MeetingField::Persons) => {
                "At least one person is required".to_string()
            }
            (FieldErrorKind::WrongFormat, _) => {
                "Date in wrong format, use dd/mm/yyyy hh:mm".to_string()
            }
            (FieldErrorKind::InvalidEmail(value), _) => format!("Invalid email: {value}"),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message())
    }
}

impl Error for FieldError {}

/// Validates a draft, collecting one error per invalid field or email.
pub fn validate_draft(draft: &MeetingDraft) -> Result<NewMeeting, Vec<FieldError>> {
    let mut errors = Vec::new();

    let subject = draft.subject.trim();
    if subject.is_empty() {
        errors.push(FieldError::new(MeetingField::Subject, FieldErrorKind::Empty));
    }

    let place = match Place::new(&draft.place) {
        Ok(place) => Some(place),
        Err(_) => {
            errors.push(FieldError::new(MeetingField::Place, FieldErrorKind::Empty));
            None
        }
    };

    let date = if draft.date.trim().is_empty() {
        errors.push(FieldError::new(MeetingField::Date, FieldErrorKind::Empty));
        None
    } else {
        let parsed = parse_date_time(&draft.date);
        if parsed.is_none() {
            errors.push(FieldError::new(
                MeetingField::Date,
                FieldErrorKind::WrongFormat,
            ));
        }
        parsed
    };

    let participants = match parse_person_entries(draft.persons.iter()) {
        Ok(persons) => persons,
        Err(mut person_errors) => {
            errors.append(&mut person_errors);
            BTreeSet::new()
        }
    };

    match (place, date) {
        (Some(place), Some(date)) if errors.is_empty() => Ok(NewMeeting {
            subject: subject.to_string(),
            place,
            date,
            participants,
        }),
        _ => Err(errors),
    }
}

/// Parses a free-form person list separated by commas, semicolons or spaces.
pub fn parse_person_list(text: &str) -> Result<BTreeSet<Person>, Vec<FieldError>> {
    parse_person_entries(PERSON_SEPARATOR_RE.split(text))
}

fn parse_person_entries<I, S>(entries: I) -> Result<BTreeSet<Person>, Vec<FieldError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut persons = BTreeSet::new();
    let mut errors = Vec::new();

    for entry in entries {
        match Person::new(entry.as_ref()) {
            Ok(person) => {
                persons.insert(person);
            }
            Err(MeetingValidationError::EmptyEmail) => {}
            Err(MeetingValidationError::InvalidEmail(value)) => errors.push(FieldError::new(
                MeetingField::Persons,
                FieldErrorKind::InvalidEmail(value),
            )),
            Err(other) => errors.push(FieldError::new(
                MeetingField::Persons,
                FieldErrorKind::InvalidEmail(other.to_string()),
            )),
        }
    }

    if errors.is_empty() {
        Ok(persons)
    } else {
        Err(errors)
    }
}
