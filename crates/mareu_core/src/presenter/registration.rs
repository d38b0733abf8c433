//! Meeting registration dialog: view contract and presenter.
//!
//! # Responsibility
//! - Offer the place catalog and a suggested date.
//! - Hold the invited persons while the dialog is open.
//! - Validate and save the meeting, flagging every invalid field.
//!
//! # Invariants
//! - Nothing is stored unless every field validates.
//! - Field errors from a previous attempt are cleared before each submit.
//! - The invited set is reset after a successful save.

use crate::datetime::{format_date_time, truncate_to_minute};
use crate::model::meeting::{Meeting, MeetingValidationError};
use crate::model::person::{format_person_list, Person};
use crate::model::place::Place;
use crate::presenter::meeting_list::NO_PARTICIPANTS_LABEL;
use crate::repo::meeting_repo::MeetingRepository;
use crate::service::meeting_form::{
    parse_person_list, FieldError, FieldErrorKind, MeetingDraft, MeetingField,
};
use crate::service::meeting_service::{MeetingService, MeetingServiceError};
use chrono::NaiveDateTime;
use log::error;
use std::collections::BTreeSet;

/// Registration dialog view contract.
pub trait RegistrationView {
    fn show_places(&mut self, places: &[Place]);
    fn show_suggested_date(&mut self, date_text: &str);
    fn show_invited_persons(&mut self, persons_line: &str);
    fn show_field_error(&mut self, error: &FieldError);
    fn clear_field_errors(&mut self);
    /// Called once the meeting is stored; the dialog should close.
    fn close(&mut self, meeting: &Meeting);
    fn show_failure(&mut self, message: &str);
}

/// Presenter for the registration dialog.
pub struct RegistrationPresenter<V: RegistrationView, R: MeetingRepository> {
    view: V,
    service: MeetingService<R>,
    invited: BTreeSet<Person>,
}

impl<V: RegistrationView, R: MeetingRepository> RegistrationPresenter<V, R> {
    pub fn new(view: V, service: MeetingService<R>) -> Self {
        Self {
            view,
            service,
            invited: BTreeSet::new(),
        }
    }

    /// Fills the dialog: place catalog, `now` as suggested date, invitees.
    pub fn init(&mut self, now: NaiveDateTime) {
        match self.service.places() {
            Ok(places) => self.view.show_places(&places),
            Err(err) => {
                error!(
                    "event=registration_init module=presenter status=error error={}",
                    err
                );
                self.view.show_failure(&err.to_string());
            }
        }
        self.view
            .show_suggested_date(&format_date_time(&truncate_to_minute(now)));
        self.show_invited();
    }

    /// Replaces the invited set from a free-form email list.
    ///
    /// On any invalid email the previous set is kept.
    pub fn set_invited_persons(&mut self, text: &str) -> bool {
        match parse_person_list(text) {
            Ok(persons) => {
                self.invited = persons;
                self.show_invited();
                true
            }
            Err(errors) => {
                for err in &errors {
                    self.view.show_field_error(err);
                }
                false
            }
        }
    }

    /// Adds one person. Returns `false` for an invalid email.
    pub fn add_invited_person(&mut self, email: &str) -> bool {
        match Person::new(email) {
            Ok(person) => {
                self.invited.insert(person);
                self.show_invited();
                true
            }
            Err(err) => {
                let kind = match err {
                    MeetingValidationError::InvalidEmail(value) => {
                        FieldErrorKind::InvalidEmail(value)
                    }
                    _ => FieldErrorKind::Empty,
                };
                self.view
                    .show_field_error(&FieldError::new(MeetingField::Persons, kind));
                false
            }
        }
    }

    /// Removes one person. Returns `false` when not invited.
    pub fn remove_invited_person(&mut self, email: &str) -> bool {
        let removed = match Person::new(email) {
            Ok(person) => self.invited.remove(&person),
            Err(_) => false,
        };
        if removed {
            self.show_invited();
        }
        removed
    }

    pub fn invited_persons(&self) -> &BTreeSet<Person> {
        &self.invited
    }

    /// Validates and stores the meeting. Returns `true` when saved.
    pub fn submit(&mut self, subject: &str, date_text: &str, place: &str) -> bool {
        self.view.clear_field_errors();

        let draft = MeetingDraft {
            subject: subject.to_string(),
            place: place.to_string(),
            date: date_text.to_string(),
            persons: self
                .invited
                .iter()
                .map(|person| person.email().to_string())
                .collect(),
        };

        match self.service.create_meeting(&draft) {
            Ok(meeting) => {
                self.invited.clear();
                self.view.close(&meeting);
                true
            }
            Err(MeetingServiceError::InvalidInput(errors)) => {
                for err in &errors {
                    self.view.show_field_error(err);
                }
                false
            }
            Err(other) => {
                self.view.show_failure(&other.to_string());
                false
            }
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn show_invited(&mut self) {
        let line = if self.invited.is_empty() {
            NO_PARTICIPANTS_LABEL.to_string()
        } else {
            format_person_list(&self.invited)
        };
        self.view.show_invited_persons(&line);
    }
}
