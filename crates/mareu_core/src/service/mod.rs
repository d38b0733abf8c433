//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presenters decoupled from store details.

pub mod meeting_form;
pub mod meeting_service;
