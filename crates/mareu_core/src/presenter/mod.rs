//! Presenters and view contracts.
//!
//! # Responsibility
//! - Translate raw view events into model calls.
//! - Push the resulting state back through the view traits.
//!
//! # Invariants
//! - Presenters are synchronous and single-threaded.
//! - Views never talk to the model directly.

pub mod meeting_list;
pub mod registration;
