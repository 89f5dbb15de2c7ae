use serde::{Serialize, Serializer};
use std::fmt;

/// Lifecycle state of an event handler. Reported by the remote API; this crate
/// never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The event handler is enabled and its rules are evaluated.
    Active,
    /// The event handler is disabled.
    Inactive,
}

impl EventStatus {
    /// Wire string expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
