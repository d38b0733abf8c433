//! Person value type.
//!
//! # Invariants
//! - `email` is stored trimmed and lowercased.
//! - Equality, hashing and ordering only look at the normalized email.

use crate::model::meeting::MeetingValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Person invited to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Person {
    email: String,
}

impl Person {
    /// Creates a person from a raw email address.
    ///
    /// # Errors
    /// - `EmptyEmail` when the input is blank.
    /// - `InvalidEmail` when the normalized value is not `local@domain.tld`.
    pub fn new(email: impl AsRef<str>) -> Result<Self, MeetingValidationError> {
        let normalized = normalize_email(email.as_ref());
        if normalized.is_empty() {
            return Err(MeetingValidationError::EmptyEmail);
        }
        if !EMAIL_RE.is_match(&normalized) {
            return Err(MeetingValidationError::InvalidEmail(normalized));
        }

        Ok(Self { email: normalized })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}

impl TryFrom<String> for Person {
    type Error = MeetingValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Person> for String {
    fn from(value: Person) -> Self {
        value.email
    }
}

/// Normalizes one email into its identity key.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Joins person emails with `", "` in iteration order.
pub fn format_person_list<'a>(persons: impl IntoIterator<Item = &'a Person>) -> String {
    persons
        .into_iter()
        .map(Person::email)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{format_person_list, Person};
    use crate::model::meeting::MeetingValidationError;
    use std::collections::BTreeSet;

    #[test]
    fn email_is_normalized_and_used_as_identity() {
        let upper = Person::new(" Alice@LamZone.com ").unwrap();
        let lower = Person::new("alice@lamzone.com").unwrap();
        assert_eq!(upper.email(), "alice@lamzone.com");
        assert_eq!(upper, lower);
    }

    #[test]
    fn rejects_blank_and_malformed_email() {
        assert_eq!(Person::new("  "), Err(MeetingValidationError::EmptyEmail));
        assert_eq!(
            Person::new("not-an-email"),
            Err(MeetingValidationError::InvalidEmail("not-an-email".to_string()))
        );
        assert!(Person::new("a@b").is_err());
        assert!(Person::new("a b@c.com").is_err());
    }

    #[test]
    fn format_person_list_follows_set_order() {
        let persons: BTreeSet<Person> = ["zoe@lamzone.com", "bob@lamzone.com"]
            .into_iter()
            .map(|email| Person::new(email).unwrap())
            .collect();
        assert_eq!(
            format_person_list(&persons),
            "bob@lamzone.com, zoe@lamzone.com"
        );
    }
}
