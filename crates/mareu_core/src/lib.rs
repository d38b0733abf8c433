//! Core domain logic for Mareu, a meeting scheduler.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod datetime;
pub mod filter;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod service;

pub use config::{load_config, ConfigError, CoreConfig};
pub use datetime::{
    format_date, format_date_time, format_filter_bound, format_time, parse_date, parse_date_time,
    parse_filter_bound, BoundSide, DateParseError,
};
pub use filter::{apply_filter, MeetingFilter};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::meeting::{Meeting, MeetingId, MeetingValidationError};
pub use model::person::Person;
pub use model::place::Place;
pub use presenter::meeting_list::{
    FilterField, FilterLabels, MeetingListItem, MeetingListPresenter, MeetingListView,
};
pub use presenter::registration::{RegistrationPresenter, RegistrationView};
pub use repo::catalog::{default_places, DEFAULT_PLACE_NAMES};
pub use repo::meeting_repo::{InMemoryMeetingRepository, MeetingRepository, RepoError, RepoResult};
pub use repo::sample_data::sample_meetings;
pub use service::meeting_form::{
    validate_draft, FieldError, FieldErrorKind, MeetingDraft, MeetingField, NewMeeting,
};
pub use service::meeting_service::{MeetingService, MeetingServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
