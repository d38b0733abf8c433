//! Place value type.

use crate::model::meeting::MeetingValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Location where a meeting happens, identified by name only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Place {
    name: String,
}

impl Place {
    /// Creates a place from a display name.
    ///
    /// Surrounding whitespace is removed; blank names are rejected.
    pub fn new(name: impl AsRef<str>) -> Result<Self, MeetingValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MeetingValidationError::EmptyPlace);
        }

        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-sensitive substring test used by place filters.
    pub fn contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Place {
    type Error = MeetingValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Place> for String {
    fn from(value: Place) -> Self {
        value.name
    }
}
