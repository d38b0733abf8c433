//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract used by the meeting service.
//! - Keep the process-memory store behind that contract.
//! - Provide the default place catalog and sample meetings.
//!
//! # Invariants
//! - Repository writes must enforce `Meeting::validate()` before mutation.
//! - The store never holds two meetings with the same content.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`).

pub mod catalog;
pub mod meeting_repo;
pub mod sample_data;
