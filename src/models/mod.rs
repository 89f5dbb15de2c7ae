mod action;
mod date_time_const;
mod event_status;
mod properties;
mod rule;
mod speed_class;

pub use action::{
    ActionConfig, ActionSendEmailProperty, ActionWebhookProperty, EventHandlerActionType,
};
pub use date_time_const::EventDateTimeConst;
pub use event_status::EventStatus;
pub use properties::Properties;
pub use rule::{EventHandlerRuleType, RuleConfig};
pub use speed_class::SpeedClass;
