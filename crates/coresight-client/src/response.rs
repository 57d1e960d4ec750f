use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a body as JSON without losing precision or bailing on deep nesting
///
/// Numbers keep their original digits and nesting depth is bounded only by the
/// heap, so a parsed body serializes back to the same structure.
pub(crate) fn parse_json(body: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;

    Ok(value)
}

/// Successful response body
///
/// The server may answer with JSON or with plain text. JSON bodies are parsed,
/// anything else is handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Body parsed as JSON
    Json(Value),
    /// Body that was not valid JSON
    Text(String),
}

impl ApiResponse {
    /// Classify a raw body
    pub fn from_body(body: String) -> Self {
        match parse_json(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }

    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Look up a top-level field of a JSON object body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Convert into a JSON value, wrapping text bodies as a JSON string
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Deserialize the body into a typed value
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not match `T`
    pub fn deserialize<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(self.into_json())
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}
