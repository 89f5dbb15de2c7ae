use crate::error::Error;
use crate::models::{EventDateTimeConst, Properties, SpeedClass};
use http::Method;
use serde::{Serialize, Serializer};
use std::fmt;

/// Effect type of an event handler action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandlerActionType {
    /// Activate the SIM.
    Activate,
    /// Deactivate the SIM.
    Deactivate,
    /// Perform an HTTP request.
    ExecuteWebRequest,
    /// Change the SIM's speed class.
    ChangeSpeedClass,
}

impl EventHandlerActionType {
    /// Wire string expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventHandlerActionType::Activate => "ActivationAction",
            EventHandlerActionType::Deactivate => "DeactivationAction",
            EventHandlerActionType::ExecuteWebRequest => "ExecuteWebRequestAction",
            EventHandlerActionType::ChangeSpeedClass => "ChangeSpeedClassAction",
        }
    }
}

impl fmt::Display for EventHandlerActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventHandlerActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One effect to perform when a rule fires.
///
/// Serializes to the `{"type": ..., "properties": ...}` shape the create
/// event handler endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionConfig {
    /// Action type discriminator.
    #[serde(rename = "type")]
    pub action_type: EventHandlerActionType,
    /// Action parameters, including the `executionDateTimeConst` timing key.
    pub properties: Properties,
}

impl ActionConfig {
    fn build(
        action_type: EventHandlerActionType,
        datetime_const: EventDateTimeConst,
        mut properties: Properties,
    ) -> Self {
        properties.insert(
            "executionDateTimeConst".to_owned(),
            datetime_const.as_str().to_owned(),
        );
        ActionConfig {
            action_type,
            properties,
        }
    }

    /// Action that activates the SIM.
    pub fn activate(datetime_const: EventDateTimeConst) -> Self {
        Self::build(
            EventHandlerActionType::Activate,
            datetime_const,
            Properties::new(),
        )
    }

    /// Action that deactivates the SIM.
    pub fn deactivate(datetime_const: EventDateTimeConst) -> Self {
        Self::build(
            EventHandlerActionType::Deactivate,
            datetime_const,
            Properties::new(),
        )
    }

    /// Action that calls the given webhook. Fails if `hook` carries a body
    /// with a method that has no request payload.
    pub fn web_hook(
        datetime_const: EventDateTimeConst,
        hook: ActionWebhookProperty,
    ) -> Result<Self, Error> {
        hook.verify()?;
        Ok(Self::build(
            EventHandlerActionType::ExecuteWebRequest,
            datetime_const,
            hook.to_properties(),
        ))
    }

    /// Action that changes the SIM's speed class.
    pub fn change_speed(datetime_const: EventDateTimeConst, speed_class: SpeedClass) -> Self {
        let properties =
            Properties::from([("speedClass".to_owned(), speed_class.as_str().to_owned())]);
        Self::build(
            EventHandlerActionType::ChangeSpeedClass,
            datetime_const,
            properties,
        )
    }

    /// Action that sends an email notification.
    ///
    /// The create endpoint registers mail actions under the web-request action
    /// type.
    pub fn send_email(datetime_const: EventDateTimeConst, mail: ActionSendEmailProperty) -> Self {
        Self::build(
            EventHandlerActionType::ExecuteWebRequest,
            datetime_const,
            mail.to_properties(),
        )
    }
}

fn method_takes_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

/// Parameters of a webhook action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionWebhookProperty {
    /// URL to call.
    pub url: String,
    /// HTTP method of the request.
    pub method: Method,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Request body. Only meaningful for POST and PUT.
    pub body: String,
}

impl ActionWebhookProperty {
    /// Check that the body is only used with a method that carries a payload.
    pub fn verify(&self) -> Result<(), Error> {
        if !method_takes_body(&self.method) && !self.body.is_empty() {
            #[cfg(feature = "internal-logs")]
            tracing::debug!(
                method = %self.method,
                "rejecting webhook body for payload-less method"
            );
            return Err(Error::InvalidWebhookBody {
                method: self.method.clone(),
                body: self.body.clone(),
            });
        }
        Ok(())
    }

    /// Property map for the webhook action. The `body` key is only present
    /// for POST and PUT.
    pub fn to_properties(&self) -> Properties {
        let mut properties = Properties::from([
            ("url".to_owned(), self.url.clone()),
            ("httpMethod".to_owned(), self.method.as_str().to_owned()),
            ("contentType".to_owned(), self.content_type.clone()),
        ]);
        if method_takes_body(&self.method) {
            properties.insert("body".to_owned(), self.body.clone());
        }
        properties
    }
}

/// Parameters of an email notification action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSendEmailProperty {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub title: String,
    /// Message body.
    pub message: String,
}

impl ActionSendEmailProperty {
    /// Property map for the email action.
    pub fn to_properties(&self) -> Properties {
        Properties::from([
            ("to".to_owned(), self.to.clone()),
            ("title".to_owned(), self.title.clone()),
            ("message".to_owned(), self.message.clone()),
        ])
    }
}
