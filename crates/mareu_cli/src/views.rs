//! Terminal implementations of the presenter view contracts.
//!
//! Views buffer rendered lines; the shell drains them after each command.

use mareu_core::{
    FieldError, FilterField, FilterLabels, Meeting, MeetingListItem, MeetingListView, Place,
    RegistrationView,
};

#[derive(Debug, Default)]
pub struct TerminalListView {
    lines: Vec<String>,
    registration_requested: bool,
}

impl TerminalListView {
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Returns and resets the pending registration request.
    pub fn take_registration_request(&mut self) -> bool {
        std::mem::take(&mut self.registration_requested)
    }
}

impl MeetingListView for TerminalListView {
    fn show_meetings(&mut self, items: &[MeetingListItem]) {
        if items.is_empty() {
            self.lines.push("No meetings.".to_string());
            return;
        }
        for (index, item) in items.iter().enumerate() {
            self.lines.push(format!("{:>2}. {}", index + 1, item.title));
            self.lines
                .push(format!("    {} | {}", item.date_text, item.participants));
        }
    }

    fn show_filters(&mut self, labels: &FilterLabels) {
        if labels == &FilterLabels::default() {
            return;
        }
        let shown = |value: &str| {
            if value.is_empty() {
                "-".to_string()
            } else {
                value.to_string()
            }
        };
        self.lines.push(format!(
            "Filters: place={} from={} to={}",
            shown(&labels.place),
            shown(&labels.start),
            shown(&labels.end)
        ));
    }

    fn show_filter_error(&mut self, field: FilterField, message: &str) {
        let name = match field {
            FilterField::Place => "place",
            FilterField::Start => "from",
            FilterField::End => "to",
        };
        self.lines.push(format!("! {name}: {message}"));
    }

    fn show_failure(&mut self, message: &str) {
        self.lines.push(format!("! {message}"));
    }

    fn open_registration(&mut self) {
        self.registration_requested = true;
    }
}

#[derive(Debug, Default)]
pub struct TerminalRegistrationView {
    lines: Vec<String>,
    suggested_date: String,
    saved: Option<Meeting>,
}

impl TerminalRegistrationView {
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn suggested_date(&self) -> &str {
        &self.suggested_date
    }

    /// Returns and resets the meeting saved by the last submit.
    pub fn take_saved(&mut self) -> Option<Meeting> {
        self.saved.take()
    }
}

impl RegistrationView for TerminalRegistrationView {
    fn show_places(&mut self, places: &[Place]) {
        let names: Vec<&str> = places.iter().map(Place::name).collect();
        self.lines.push(format!("Places: {}", names.join(", ")));
    }

    fn show_suggested_date(&mut self, date_text: &str) {
        self.suggested_date = date_text.to_string();
    }

    fn show_invited_persons(&mut self, persons_line: &str) {
        self.lines.push(format!("Invited: {persons_line}"));
    }

    fn show_field_error(&mut self, error: &FieldError) {
        self.lines.push(format!("! {error}"));
    }

    fn clear_field_errors(&mut self) {}

    fn close(&mut self, meeting: &Meeting) {
        self.lines.push(format!("Saved \"{}\".", meeting.subject));
        self.saved = Some(meeting.clone());
    }

    fn show_failure(&mut self, message: &str) {
        self.lines.push(format!("! {message}"));
    }
}
