use thiserror::Error;

/// Client-side precondition failures. Raised before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Please enter some text first.")]
    EmptyText,

    #[error("salt level must be between 0 and 100 percent, got {0}")]
    SaltOutOfRange(u32),

    #[error("map size must be positive")]
    ZeroSize,
}

/// Failure of a single round trip to the fingerprint service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network failure, CORS rejection, aborted fetch.
    #[error("{0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// Body was not JSON, or JSON of the wrong shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Well-formed JSON whose values break the contract.
    #[error("invalid response: {0}")]
    Invalid(String),

    /// The service answered with an `error` field.
    #[error("{0}")]
    Service(String),
}

impl ServiceError {
    /// Text shown to the user, matching the `Error: <message>` format.
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Decode(e.to_string())
    }
}
