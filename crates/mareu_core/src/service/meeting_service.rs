//! Meeting use-case service.
//!
//! # Responsibility
//! - Act as the presentation model: meeting store access plus the active
//!   list filter.
//! - Validate registration drafts before anything reaches the repository.
//!
//! # Invariants
//! - Rejected drafts never reach the repository.
//! - `filtered_meetings` works on a snapshot and never mutates the store.
//! - Listed meetings are sorted by date ascending.

use crate::filter::{apply_filter, normalize_place_filter, MeetingFilter};
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::person::Person;
use crate::model::place::Place;
use crate::repo::meeting_repo::{MeetingRepository, RepoError, RepoResult};
use crate::service::meeting_form::{validate_draft, FieldError, MeetingDraft};
use chrono::NaiveDateTime;
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for meeting use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingServiceError {
    /// Draft failed field validation.
    InvalidInput(Vec<FieldError>),
    /// Target meeting does not exist.
    MeetingNotFound(MeetingId),
    /// An identical meeting is already scheduled.
    DuplicateMeeting(MeetingId),
    /// Store-level failure.
    Repo(RepoError),
}

impl Display for MeetingServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                let details = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "invalid meeting input: {details}")
            }
            Self::MeetingNotFound(id) => write!(f, "meeting not found: {id}"),
            Self::DuplicateMeeting(id) => {
                write!(f, "an identical meeting is already scheduled: {id}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MeetingServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MeetingServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::MeetingNotFound(id),
            RepoError::Duplicate { existing } => Self::DuplicateMeeting(existing),
            other => Self::Repo(other),
        }
    }
}

/// Meeting service facade over repository implementations.
pub struct MeetingService<R: MeetingRepository> {
    repo: R,
    filter: MeetingFilter,
}

impl<R: MeetingRepository> MeetingService<R> {
    /// Creates a service with no active filter.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            filter: MeetingFilter::default(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates a registration draft and stores the resulting meeting.
    pub fn create_meeting(&self, draft: &MeetingDraft) -> Result<Meeting, MeetingServiceError> {
        let new_meeting = validate_draft(draft).map_err(|errors| {
            warn!(
                "event=meeting_create module=service status=error error_code=invalid_input fields={}",
                errors
                    .iter()
                    .map(|err| err.field.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            );
            MeetingServiceError::InvalidInput(errors)
        })?;

        let meeting = new_meeting.into_meeting();
        match self.repo.create_meeting(&meeting) {
            Ok(id) => {
                info!(
                    "event=meeting_create module=service status=ok meeting_id={} participants={}",
                    id,
                    meeting.participants.len()
                );
                Ok(meeting)
            }
            Err(err) => {
                warn!(
                    "event=meeting_create module=service status=error error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Replaces one meeting fully.
    pub fn replace_meeting(&self, meeting: &Meeting) -> Result<(), MeetingServiceError> {
        self.repo.replace_meeting(meeting)?;
        info!(
            "event=meeting_replace module=service status=ok meeting_id={}",
            meeting.id
        );
        Ok(())
    }

    /// Deletes one meeting and returns it.
    pub fn delete_meeting(&self, id: MeetingId) -> Result<Meeting, MeetingServiceError> {
        let removed = self.repo.delete_meeting(id)?;
        info!("event=meeting_delete module=service status=ok meeting_id={id}");
        Ok(removed)
    }

    pub fn get_meeting(&self, id: MeetingId) -> RepoResult<Option<Meeting>> {
        self.repo.get_meeting(id)
    }

    /// Lists every stored meeting, sorted by date.
    pub fn all_meetings(&self) -> RepoResult<Vec<Meeting>> {
        let meetings = self.repo.list_meetings()?;
        Ok(apply_filter(&meetings, &MeetingFilter::default()))
    }

    /// Lists the meetings accepted by the active filter, sorted by date.
    pub fn filtered_meetings(&self) -> RepoResult<Vec<Meeting>> {
        let meetings = self.repo.list_meetings()?;
        Ok(apply_filter(&meetings, &self.filter))
    }

    pub fn filter(&self) -> &MeetingFilter {
        &self.filter
    }

    /// Sets the place substring; blank input clears it.
    pub fn set_place_filter(&mut self, place: &str) {
        self.filter.place = normalize_place_filter(place);
    }

    pub fn set_start_filter(&mut self, start: Option<NaiveDateTime>) {
        self.filter.start = start;
    }

    pub fn set_end_filter(&mut self, end: Option<NaiveDateTime>) {
        self.filter.end = end;
    }

    pub fn set_filter(&mut self, filter: MeetingFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Places offered to the registration dialog.
    pub fn places(&self) -> RepoResult<Vec<Place>> {
        self.repo.list_places()
    }

    /// Every person invited to at least one meeting, ordered by email.
    pub fn known_persons(&self) -> RepoResult<BTreeSet<Person>> {
        Ok(self
            .repo
            .list_meetings()?
            .into_iter()
            .flat_map(|meeting| meeting.participants)
            .collect())
    }
}
