use serde::{Serialize, Serializer};
use std::fmt;

/// Symbolic time value controlling when a rule expires or an action executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDateTimeConst {
    /// Immediately.
    Immediately,
    /// One day (24 hours) later.
    AfterOneDay,
    /// At the beginning of the next day.
    BeginningOfNextDay,
    /// At the beginning of the next month.
    BeginningOfNextMonth,
    /// Never.
    Never,
}

impl EventDateTimeConst {
    /// Wire string expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventDateTimeConst::Immediately => "IMMEDIATELY",
            EventDateTimeConst::AfterOneDay => "AFTER_ONE_DAY",
            EventDateTimeConst::BeginningOfNextDay => "BEGINNING_OF_NEXT_DAY",
            EventDateTimeConst::BeginningOfNextMonth => "BEGINNING_OF_NEXT_MONTH",
            EventDateTimeConst::Never => "NEVER",
        }
    }
}

impl fmt::Display for EventDateTimeConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventDateTimeConst {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(EventDateTimeConst::Immediately, "IMMEDIATELY")]
    #[test_case(EventDateTimeConst::AfterOneDay, "AFTER_ONE_DAY")]
    #[test_case(EventDateTimeConst::BeginningOfNextDay, "BEGINNING_OF_NEXT_DAY")]
    #[test_case(EventDateTimeConst::BeginningOfNextMonth, "BEGINNING_OF_NEXT_MONTH")]
    #[test_case(EventDateTimeConst::Never, "NEVER")]
    fn wire_string(value: EventDateTimeConst, expected: &'static str) {
        assert_eq!(expected, value.as_str());
        assert_eq!(expected, value.to_string());
        assert_eq!(
            format!("\"{}\"", expected),
            serde_json::to_string(&value).unwrap()
        );
    }
}
