//! Counter request/response types.
//!
//! Provides the JSON bodies of `GET /counter` and `POST /counter`, and the
//! parsed [`CounterAction`].

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /counter`.
///
/// `action` accepts any JSON value so that a missing, null, or non-string
/// field reaches validation and is reported as an invalid action rather
/// than a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CounterActionRequest {
    /// `"increment"` or `"decrement"`.
    #[serde(default)]
    pub action: Option<serde_json::Value>,
}

impl CounterActionRequest {
    /// The action as a string, if it is one.
    pub fn action_str(&self) -> Option<&str> {
        self.action.as_ref().and_then(serde_json::Value::as_str)
    }
}

/// Successful response of both counter endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// The counter value after the request.
    pub count: i64,
}

/// Error body of both counter endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic, client-safe message.
    pub error: String,
}

/// A validated counter update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl CounterAction {
    /// Parses the wire value. Anything other than the two known actions,
    /// including a missing one, is [`ApiError::InvalidAction`].
    pub fn parse(action: Option<&str>) -> Result<Self, ApiError> {
        match action {
            Some("increment") => Ok(CounterAction::Increment),
            Some("decrement") => Ok(CounterAction::Decrement),
            _ => Err(ApiError::InvalidAction),
        }
    }

    /// The delta this action applies.
    pub fn delta(self) -> i64 {
        match self {
            CounterAction::Increment => 1,
            CounterAction::Decrement => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
        }
    }
}
