use serde::{Serialize, Serializer};
use std::fmt;

/// Speed class of a SIM, from slowest to fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedClass {
    /// `s1.minimum`
    S1Minimum,
    /// `s1.slow`
    S1Slow,
    /// `s1.standard`
    S1Standard,
    /// `s1.fast`
    S1Fast,
}

impl SpeedClass {
    /// Wire string expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedClass::S1Minimum => "s1.minimum",
            SpeedClass::S1Slow => "s1.slow",
            SpeedClass::S1Standard => "s1.standard",
            SpeedClass::S1Fast => "s1.fast",
        }
    }
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SpeedClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
