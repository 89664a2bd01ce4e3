//! Wire types and errors shared by backend implementations.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, DNS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected.
    #[error("could not parse response: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Message suitable for a user-facing notification.
    ///
    /// Falls back to the debug form when the display message is blank.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { format!("{self:?}") } else { message }
    }
}

// =============================================================================
// COMMENTS
// =============================================================================

/// A single stored comment. Opaque text; the server decides the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse the `GET /data` body: a JSON array of strings.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not a JSON string array.
pub fn parse_comments(body: &str) -> Result<Vec<Comment>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

// =============================================================================
// HAPPINESS DATASET
// =============================================================================

/// Body of the static happiness-score dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HappinessDataset {
    pub data: Vec<HappinessRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HappinessRecord {
    pub name: String,
    #[serde(rename = "happinessScore")]
    pub happiness_score: ScoreField,
}

/// The dataset ships scores as strings, but plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreField {
    Number(f64),
    Text(String),
}

impl ScoreField {
    /// Numeric value of the score, if it parses to a finite float.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(raw) => raw.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Parse the happiness dataset body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body does not match the dataset shape.
pub fn parse_happiness(body: &str) -> Result<HappinessDataset, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
