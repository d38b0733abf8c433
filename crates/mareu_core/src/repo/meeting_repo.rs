//! Meeting repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable create/replace/get/list/delete APIs over the meeting store.
//! - Expose the place catalog used by the registration dialog.
//!
//! # Invariants
//! - Write paths call `Meeting::validate()` before mutating the store.
//! - Content duplicates are rejected, whatever their ids.
//! - `list_meetings` returns a snapshot in insertion order; callers cannot
//!   mutate the store through it.
//! - The store is single-threaded (`Rc<RefCell<_>>`) and every clone of a
//!   repository handle shares it.

use crate::model::meeting::{Meeting, MeetingId, MeetingValidationError};
use crate::model::place::Place;
use crate::repo::catalog::default_places;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for meeting store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(MeetingValidationError),
    NotFound(MeetingId),
    /// Another stored meeting (`existing`) already has the same content.
    Duplicate { existing: MeetingId },
    /// The id is already used by a stored meeting.
    IdConflict(MeetingId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "meeting not found: {id}"),
            Self::Duplicate { existing } => {
                write!(f, "an identical meeting is already scheduled: {existing}")
            }
            Self::IdConflict(id) => write!(f, "meeting id already in use: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::Duplicate { .. } | Self::IdConflict(_) => None,
        }
    }
}

impl From<MeetingValidationError> for RepoError {
    fn from(value: MeetingValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for meeting operations.
pub trait MeetingRepository {
    fn create_meeting(&self, meeting: &Meeting) -> RepoResult<MeetingId>;
    /// Replaces the stored meeting that has the same id.
    fn replace_meeting(&self, meeting: &Meeting) -> RepoResult<()>;
    fn get_meeting(&self, id: MeetingId) -> RepoResult<Option<Meeting>>;
    fn list_meetings(&self) -> RepoResult<Vec<Meeting>>;
    /// Removes exactly one meeting and returns it.
    fn delete_meeting(&self, id: MeetingId) -> RepoResult<Meeting>;
    fn list_places(&self) -> RepoResult<Vec<Place>>;
}

#[derive(Debug, Default)]
struct MeetingStore {
    meetings: Vec<Meeting>,
    places: Vec<Place>,
}

impl MeetingStore {
    fn position(&self, id: MeetingId) -> Option<usize> {
        self.meetings.iter().position(|stored| stored.id == id)
    }

    fn find_duplicate(&self, meeting: &Meeting) -> Option<MeetingId> {
        self.meetings
            .iter()
            .find(|stored| stored.id != meeting.id && stored.same_content(meeting))
            .map(|stored| stored.id)
    }
}

/// Process-memory meeting repository.
///
/// Cloning yields another handle onto the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeetingRepository {
    store: Rc<RefCell<MeetingStore>>,
}

impl InMemoryMeetingRepository {
    /// Creates an empty store with the default place catalog.
    pub fn new() -> Self {
        Self::with_places(default_places())
    }

    /// Creates an empty store with a caller-provided place catalog.
    pub fn with_places(places: Vec<Place>) -> Self {
        Self {
            store: Rc::new(RefCell::new(MeetingStore {
                meetings: Vec::new(),
                places,
            })),
        }
    }

    /// Inserts meetings one by one, stopping at the first rejected entry.
    ///
    /// Returns the number of inserted meetings.
    pub fn seed(&self, meetings: impl IntoIterator<Item = Meeting>) -> RepoResult<usize> {
        let mut inserted = 0;
        for meeting in meetings {
            self.create_meeting(&meeting)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub fn len(&self) -> usize {
        self.store.borrow().meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().meetings.is_empty()
    }
}

impl MeetingRepository for InMemoryMeetingRepository {
    fn create_meeting(&self, meeting: &Meeting) -> RepoResult<MeetingId> {
        meeting.validate()?;

        let mut store = self.store.borrow_mut();
        if store.position(meeting.id).is_some() {
            return Err(RepoError::IdConflict(meeting.id));
        }
        if let Some(existing) = store.find_duplicate(meeting) {
            return Err(RepoError::Duplicate { existing });
        }

        store.meetings.push(meeting.clone());
        Ok(meeting.id)
    }

    fn replace_meeting(&self, meeting: &Meeting) -> RepoResult<()> {
        meeting.validate()?;

        let mut store = self.store.borrow_mut();
        let index = store
            .position(meeting.id)
            .ok_or(RepoError::NotFound(meeting.id))?;
        if let Some(existing) = store.find_duplicate(meeting) {
            return Err(RepoError::Duplicate { existing });
        }

        store.meetings[index] = meeting.clone();
        Ok(())
    }

    fn get_meeting(&self, id: MeetingId) -> RepoResult<Option<Meeting>> {
        let store = self.store.borrow();
        Ok(store
            .meetings
            .iter()
            .find(|stored| stored.id == id)
            .cloned())
    }

    fn list_meetings(&self) -> RepoResult<Vec<Meeting>> {
        Ok(self.store.borrow().meetings.clone())
    }

    fn delete_meeting(&self, id: MeetingId) -> RepoResult<Meeting> {
        let mut store = self.store.borrow_mut();
        let index = store.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(store.meetings.remove(index))
    }

    fn list_places(&self) -> RepoResult<Vec<Place>> {
        Ok(self.store.borrow().places.clone())
    }
}
