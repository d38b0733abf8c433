//! Meeting list screen: view contract and presenter.
//!
//! # Responsibility
//! - Render the filtered, date-sorted meeting list.
//! - Parse filter input and flag invalid bounds on the matching field.
//! - Delete meetings addressed by id or by position in the rendered list.
//!
//! # Invariants
//! - Every state change ends with a full `refresh`, so the view always
//!   shows the list and filter labels derived from the current model.
//! - A malformed bound keeps the previous bound for that side.
//! - Positions refer to the list produced by the last `refresh`.

use crate::datetime::{
    format_date_time, format_filter_bound, format_time, parse_filter_bound, BoundSide,
};
use crate::filter::MeetingFilter;
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::person::format_person_list;
use crate::repo::meeting_repo::MeetingRepository;
use crate::service::meeting_service::MeetingService;
use chrono::NaiveDateTime;
use log::{debug, error, warn};

/// Participants label for a meeting nobody is invited to.
pub const NO_PARTICIPANTS_LABEL: &str = "Nobody invited yet";
/// Field error for a filter bound that does not parse.
pub const FILTER_DATE_ERROR: &str = "Please use the dd/mm/yyyy format or leave empty";
/// Field error for `start > end`.
pub const FILTER_RANGE_ERROR: &str = "End date is before start date";

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingListItem {
    pub id: MeetingId,
    /// `"{subject} - {HH:mm} - {place}"`.
    pub title: String,
    /// Full `dd/MM/yyyy HH:mm` date.
    pub date_text: String,
    /// Invited emails joined by `", "`, or [`NO_PARTICIPANTS_LABEL`].
    pub participants: String,
}

impl MeetingListItem {
    pub fn from_meeting(meeting: &Meeting) -> Self {
        let participants = if meeting.participants.is_empty() {
            NO_PARTICIPANTS_LABEL.to_string()
        } else {
            format_person_list(&meeting.participants)
        };

        Self {
            id: meeting.id,
            title: format!(
                "{} - {} - {}",
                meeting.subject,
                format_time(&meeting.date),
                meeting.place
            ),
            date_text: format_date_time(&meeting.date),
            participants,
        }
    }
}

/// Filter input field on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Place,
    Start,
    End,
}

impl From<BoundSide> for FilterField {
    fn from(value: BoundSide) -> Self {
        match value {
            BoundSide::Start => Self::Start,
            BoundSide::End => Self::End,
        }
    }
}

/// Text shown in the filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterLabels {
    pub place: String,
    pub start: String,
    pub end: String,
}

impl FilterLabels {
    pub fn from_filter(filter: &MeetingFilter) -> Self {
        Self {
            place: filter.place.clone().unwrap_or_default(),
            start: format_filter_bound(filter.start.as_ref(), BoundSide::Start),
            end: format_filter_bound(filter.end.as_ref(), BoundSide::End),
        }
    }
}

/// Meeting list view contract.
pub trait MeetingListView {
    fn show_meetings(&mut self, items: &[MeetingListItem]);
    fn show_filters(&mut self, labels: &FilterLabels);
    fn show_filter_error(&mut self, field: FilterField, message: &str);
    fn show_failure(&mut self, message: &str);
    fn open_registration(&mut self);
}

/// Presenter for the meeting list screen.
pub struct MeetingListPresenter<V: MeetingListView, R: MeetingRepository> {
    view: V,
    service: MeetingService<R>,
    rendered: Vec<MeetingId>,
}

impl<V: MeetingListView, R: MeetingRepository> MeetingListPresenter<V, R> {
    pub fn new(view: V, service: MeetingService<R>) -> Self {
        Self {
            view,
            service,
            rendered: Vec::new(),
        }
    }

    /// Renders the initial state.
    pub fn init(&mut self) {
        self.refresh();
    }

    /// Re-derives the list and filter labels from the model.
    pub fn refresh(&mut self) {
        match self.service.filtered_meetings() {
            Ok(meetings) => {
                let items: Vec<MeetingListItem> =
                    meetings.iter().map(MeetingListItem::from_meeting).collect();
                self.rendered = items.iter().map(|item| item.id).collect();
                debug!(
                    "event=meeting_list_refresh module=presenter status=ok rows={}",
                    items.len()
                );
                self.view.show_meetings(&items);
            }
            Err(err) => {
                error!(
                    "event=meeting_list_refresh module=presenter status=error error={}",
                    err
                );
                self.rendered.clear();
                self.view.show_failure(&err.to_string());
            }
        }

        let labels = FilterLabels::from_filter(self.service.filter());
        self.view.show_filters(&labels);
    }

    /// Asks the view to open the registration dialog.
    pub fn request_registration(&mut self) {
        self.view.open_registration();
    }

    /// Deletes the meeting rendered at `position` (0-based).
    pub fn delete_at(&mut self, position: usize) -> bool {
        let Some(id) = self.rendered.get(position).copied() else {
            warn!(
                "event=meeting_delete module=presenter status=error error_code=bad_position position={} rows={}",
                position,
                self.rendered.len()
            );
            self.view
                .show_failure(&format!(
                "no meeting at position {}",
                position.saturating_add(1)
            ));
            return false;
        };
        self.delete(id)
    }

    /// Deletes one meeting by id.
    pub fn delete(&mut self, id: MeetingId) -> bool {
        let deleted = match self.service.delete_meeting(id) {
            Ok(_) => true,
            Err(err) => {
                self.view.show_failure(&err.to_string());
                false
            }
        };
        self.refresh();
        deleted
    }

    /// Applies all three filter inputs at once.
    ///
    /// The place filter always applies; each malformed bound is flagged and
    /// keeps its previous value. Returns `true` when nothing was flagged.
    pub fn apply_filters(&mut self, place: &str, start: &str, end: &str) -> bool {
        let current = self.service.filter();
        let mut errors = Vec::new();
        let start = parse_bound(start, BoundSide::Start).unwrap_or_else(|flag| {
            errors.push(flag);
            current.start
        });
        let end = parse_bound(end, BoundSide::End).unwrap_or_else(|flag| {
            errors.push(flag);
            current.end
        });

        self.service
            .set_filter(MeetingFilter::new().with_place(place).with_range(start, end));
        self.finish_filter_update(errors)
    }

    pub fn set_place_filter(&mut self, place: &str) {
        self.service.set_place_filter(place);
        self.refresh();
    }

    pub fn set_start_filter(&mut self, text: &str) -> bool {
        let errors: Vec<_> = self.update_bound(text, BoundSide::Start).into_iter().collect();
        self.finish_filter_update(errors)
    }

    pub fn set_end_filter(&mut self, text: &str) -> bool {
        let errors: Vec<_> = self.update_bound(text, BoundSide::End).into_iter().collect();
        self.finish_filter_update(errors)
    }

    pub fn clear_filters(&mut self) {
        self.service.clear_filters();
        self.refresh();
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn service(&self) -> &MeetingService<R> {
        &self.service
    }

    fn update_bound(&mut self, text: &str, side: BoundSide) -> Option<(FilterField, &'static str)> {
        match parse_bound(text, side) {
            Ok(bound) => {
                match side {
                    BoundSide::Start => self.service.set_start_filter(bound),
                    BoundSide::End => self.service.set_end_filter(bound),
                }
                None
            }
            Err(flag) => Some(flag),
        }
    }

    fn finish_filter_update(&mut self, mut errors: Vec<(FilterField, &'static str)>) -> bool {
        if self.service.filter().has_inverted_range() {
            errors.push((FilterField::End, FILTER_RANGE_ERROR));
        }

        self.refresh();
        for (field, message) in &errors {
            self.view.show_filter_error(*field, message);
        }
        errors.is_empty()
    }
}

fn parse_bound(
    text: &str,
    side: BoundSide,
) -> Result<Option<NaiveDateTime>, (FilterField, &'static str)> {
    parse_filter_bound(text, side).map_err(|err| {
        debug!(
            "event=meeting_filter module=presenter status=error field={:?} error={}",
            side, err
        );
        (FilterField::from(side), FILTER_DATE_ERROR)
    })
}
