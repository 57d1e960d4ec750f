use serde_json::{Map, Value};

use crate::response::parse_json;

/// Client-specific result type
pub type Result<T> = std::result::Result<T, CoresightError>;

/// Errors from the Coresight client
#[derive(Debug, thiserror::Error)]
pub enum CoresightError {
    /// Transport failure (DNS, refused connection, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status outside `200..300`
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid configuration, only raised while building a client
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoresightError {
    /// The API error, if the server rejected the request
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            _ => None,
        }
    }
}

/// Non-2xx response from the messaging API
///
/// `message` is the raw response body. `details` is the body parsed as JSON,
/// or an empty object when the body is not JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API Error {status_code}: {message}")]
pub struct ApiError {
    status_code: u16,
    message: String,
    details: Value,
}

impl ApiError {
    /// Build an error from a status code and the raw response body
    pub fn from_body(status_code: u16, body: String) -> Self {
        let details = parse_json(&body).unwrap_or_else(|_| Value::Object(Map::new()));

        Self {
            status_code,
            message: body,
            details,
        }
    }

    /// HTTP status code exactly as received
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Raw response body
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parsed response body, empty object if it was not JSON
    pub const fn details(&self) -> &Value {
        &self.details
    }
}
