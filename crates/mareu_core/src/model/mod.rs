//! Meeting domain model.
//!
//! # Responsibility
//! - Define the value types shared by repository, service and presenters.
//! - Own field-level validation for meetings, persons and places.
//!
//! # Invariants
//! - `Person` identity is its normalized email.
//! - `Place` identity is its trimmed name.
//! - Meeting content identity ignores `MeetingId`.

pub mod meeting;
pub mod person;
pub mod place;
