//! Participants of a group

use serde::{Deserialize, Serialize};
use std::fmt;

/// A member of the group, identified by display name
///
/// The name is the key: two participants are the same exactly when their
/// names are equal, case included. Case-insensitive uniqueness is enforced
/// only when a participant is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant from an already validated name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if `other` names this participant ignoring case
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
