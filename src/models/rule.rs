use crate::models::{EventDateTimeConst, Properties};
use serde::{Serialize, Serializer};
use std::fmt;

/// Trigger condition type of an event handler rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandlerRuleType {
    /// Total traffic within the current day exceeds a threshold.
    DailyTraffic,
    /// Total traffic within the current month exceeds a threshold.
    MonthlyTraffic,
}

impl EventHandlerRuleType {
    /// Wire string expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventHandlerRuleType::DailyTraffic => "DailyTrafficRule",
            EventHandlerRuleType::MonthlyTraffic => "MonthlyTrafficRule",
        }
    }
}

impl fmt::Display for EventHandlerRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventHandlerRuleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One trigger condition of an event handler, e.g. a traffic threshold.
///
/// Serializes to the `{"type": ..., "properties": ...}` shape the create
/// event handler endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    /// Rule type discriminator.
    #[serde(rename = "type")]
    pub rule_type: EventHandlerRuleType,
    /// Rule parameters, including the `inactiveTimeoutDateConst` timing key.
    pub properties: Properties,
}

impl RuleConfig {
    fn build(
        rule_type: EventHandlerRuleType,
        datetime_const: EventDateTimeConst,
        mut properties: Properties,
    ) -> Self {
        properties.insert(
            "inactiveTimeoutDateConst".to_owned(),
            datetime_const.as_str().to_owned(),
        );
        RuleConfig {
            rule_type,
            properties,
        }
    }

    /// Rule that fires when the SIM's traffic within one day exceeds `mib`
    /// megabytes. Any value is accepted; range checks are left to the API.
    pub fn daily_traffic(mib: u64, datetime_const: EventDateTimeConst) -> Self {
        let properties = Properties::from([(
            "limitTotalTrafficMegaByte".to_owned(),
            mib.to_string(),
        )]);
        Self::build(EventHandlerRuleType::DailyTraffic, datetime_const, properties)
    }

    /// Rule that fires when the SIM's traffic within one month exceeds `mib`
    /// megabytes.
    pub fn monthly_traffic(mib: u64, datetime_const: EventDateTimeConst) -> Self {
        let properties = Properties::from([(
            "limitTotalTrafficMegaByte".to_owned(),
            mib.to_string(),
        )]);
        Self::build(
            EventHandlerRuleType::MonthlyTraffic,
            datetime_const,
            properties,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 ; "zero")]
    #[test_case(500 ; "five hundred")]
    #[test_case(u64::MAX ; "max")]
    fn daily_traffic_properties(mib: u64) {
        let rule = RuleConfig::daily_traffic(mib, EventDateTimeConst::BeginningOfNextDay);
        assert_eq!(EventHandlerRuleType::DailyTraffic, rule.rule_type);
        assert_eq!(
            mib.to_string(),
            rule.properties["limitTotalTrafficMegaByte"]
        );
        assert_eq!(
            "BEGINNING_OF_NEXT_DAY",
            rule.properties["inactiveTimeoutDateConst"]
        );
        assert_eq!(2, rule.properties.len());
    }

    #[test]
    fn monthly_traffic_properties() {
        let rule = RuleConfig::monthly_traffic(3000, EventDateTimeConst::BeginningOfNextMonth);
        assert_eq!(EventHandlerRuleType::MonthlyTraffic, rule.rule_type);
        assert_eq!("3000", rule.properties["limitTotalTrafficMegaByte"]);
        assert_eq!(
            "BEGINNING_OF_NEXT_MONTH",
            rule.properties["inactiveTimeoutDateConst"]
        );
        assert_eq!(2, rule.properties.len());
    }
}
