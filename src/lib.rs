//! Config builders for the event handler API of a cloud IoT SIM management
//! service.
//!
//! An event handler pairs rules (trigger conditions, e.g. a daily traffic
//! threshold) with actions (effects, e.g. deactivating the SIM or calling a
//! webhook). This crate builds the [`RuleConfig`] and [`ActionConfig`] payloads
//! the create event handler endpoint expects, with the exact property key
//! names of the wire contract. Sending them is the job of the surrounding API
//! client; there is no networking here.
//!
//! # Usage
//!
//! Build a rule and the actions to run when it fires, then hand them to your
//! API client:
//!
//! ```rust
//! use sim_event_config::{
//!     ActionConfig, ActionWebhookProperty, EventDateTimeConst, RuleConfig, SpeedClass,
//! };
//!
//! # fn main() -> Result<(), sim_event_config::Error> {
//! let rule = RuleConfig::daily_traffic(500, EventDateTimeConst::BeginningOfNextDay);
//!
//! let slow_down =
//!     ActionConfig::change_speed(EventDateTimeConst::Immediately, SpeedClass::S1Minimum);
//! let notify = ActionConfig::web_hook(
//!     EventDateTimeConst::Immediately,
//!     ActionWebhookProperty {
//!         url: "https://example.com/hook".to_owned(),
//!         method: http::Method::POST,
//!         content_type: "application/json".to_owned(),
//!         body: "{\"over\":true}".to_owned(),
//!     },
//! )?;
//!
//! assert_eq!("500", rule.properties["limitTotalTrafficMegaByte"]);
//! assert_eq!("s1.minimum", slow_down.properties["speedClass"]);
//! assert_eq!("IMMEDIATELY", notify.properties["executionDateTimeConst"]);
//! # Ok(())
//! # }
//! ```
//!
//! All builders return fresh, unshared values and perform no I/O, so they are
//! safe to call from any thread. The only fallible operation is
//! [`ActionConfig::web_hook`], which rejects a request body paired with an
//! HTTP method that has no payload.
#![doc(html_root_url = "https://docs.rs/sim-event-config/0.3.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod error;
mod models;

pub use error::Error;
pub use models::{
    ActionConfig, ActionSendEmailProperty, ActionWebhookProperty, EventDateTimeConst,
    EventHandlerActionType, EventHandlerRuleType, EventStatus, Properties, RuleConfig, SpeedClass,
};
