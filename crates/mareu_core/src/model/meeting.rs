//! Meeting domain record.
//!
//! # Responsibility
//! - Define the canonical meeting shape used by every layer.
//! - Provide validation and content-identity helpers for store invariants.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `subject` is non-blank and carries no surrounding whitespace.
//! - `participants` is an ordered set, so one person is invited at most once.
//! - Two meetings with the same subject, place, date and participants are
//!   duplicates even when their ids differ.

use crate::model::person::Person;
use crate::model::place::Place;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier used by front-ends to address one meeting.
pub type MeetingId = Uuid;

/// Validation failures for meeting, person and place values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingValidationError {
    NilId,
    EmptySubject,
    UntrimmedSubject,
    EmptyPlace,
    EmptyEmail,
    InvalidEmail(String),
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "meeting id must not be nil"),
            Self::EmptySubject => write!(f, "meeting subject must not be empty"),
            Self::UntrimmedSubject => {
                write!(f, "meeting subject must not start or end with whitespace")
            }
            Self::EmptyPlace => write!(f, "meeting place must not be empty"),
            Self::EmptyEmail => write!(f, "person email must not be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for MeetingValidationError {}

/// Scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeetingWire")]
pub struct Meeting {
    pub id: MeetingId,
    pub subject: String,
    pub place: Place,
    /// Local wall-clock time, minute precision.
    pub date: NaiveDateTime,
    pub participants: BTreeSet<Person>,
}

#[derive(Deserialize)]
struct MeetingWire {
    id: MeetingId,
    subject: String,
    place: Place,
    date: NaiveDateTime,
    #[serde(default)]
    participants: BTreeSet<Person>,
}

impl TryFrom<MeetingWire> for Meeting {
    type Error = MeetingValidationError;

    fn try_from(value: MeetingWire) -> Result<Self, Self::Error> {
        let meeting = Self {
            id: value.id,
            subject: value.subject.trim().to_string(),
            place: value.place,
            date: value.date,
            participants: value.participants,
        };
        meeting.validate()?;
        Ok(meeting)
    }
}

impl Meeting {
    /// Creates a meeting with a generated id and nobody invited.
    ///
    /// The subject is trimmed; call [`Meeting::validate`] before storing.
    pub fn new(subject: impl AsRef<str>, place: Place, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.as_ref().trim().to_string(),
            place,
            date,
            participants: BTreeSet::new(),
        }
    }

    /// Creates a meeting with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` for `Uuid::nil()`.
    /// - `EmptySubject` for a blank subject.
    pub fn with_id(
        id: MeetingId,
        subject: impl AsRef<str>,
        place: Place,
        date: NaiveDateTime,
    ) -> Result<Self, MeetingValidationError> {
        let mut meeting = Self::new(subject, place, date);
        meeting.id = id;
        meeting.validate()?;
        Ok(meeting)
    }

    /// Builder-style helper that adds invited persons.
    pub fn with_participants(mut self, persons: impl IntoIterator<Item = Person>) -> Self {
        self.participants.extend(persons);
        self
    }

    /// Invites one person. Returns `false` when already invited.
    pub fn invite(&mut self, person: Person) -> bool {
        self.participants.insert(person)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.id.is_nil() {
            return Err(MeetingValidationError::NilId);
        }
        let trimmed = self.subject.trim();
        if trimmed.is_empty() {
            return Err(MeetingValidationError::EmptySubject);
        }
        if trimmed.len() != self.subject.len() {
            return Err(MeetingValidationError::UntrimmedSubject);
        }
        Ok(())
    }

    /// Compares everything except the id.
    pub fn same_content(&self, other: &Meeting) -> bool {
        self.subject == other.subject
            && self.place == other.place
            && self.date == other.date
            && self.participants == other.participants
    }
}
