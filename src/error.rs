/// Errors that can occur while building rule and action configs.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A webhook action was given a request body together with an HTTP method
    /// that does not carry a payload.
    #[error("{method} method does not use body field [{body}]")]
    InvalidWebhookBody {
        /// HTTP method of the webhook action.
        method: http::Method,
        /// The rejected request body.
        body: String,
    },
}
