use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OutdentError;

/// One request read from stdin.
///
/// Fields are kept as raw JSON values so that type problems surface as
/// [`OutdentError::InvalidArgument`] instead of a deserialization failure.
/// A missing field reads as `null`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Request {
    /// `{"op":"collapse","text":..,"maxEmptyLines":..}`
    Collapse {
        #[serde(default)]
        text: Value,
        #[serde(default, rename = "maxEmptyLines", alias = "max_empty_lines")]
        max_empty_lines: Value,
    },
    /// `{"op":"strip","text":..,"options":{..}}`
    Strip {
        #[serde(default)]
        text: Value,
        #[serde(default)]
        options: Value,
    },
}

/// Response written to stdout.
///
/// Either `{"text":"..."}` or `{"error":{"kind":..,"message":..}}`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

impl Response {
    pub fn text(text: String) -> Self {
        Self {
            text: Some(text),
            error: None,
        }
    }

    pub fn error(error: &OutdentError) -> Self {
        Self {
            text: None,
            error: Some(ErrorBody {
                kind: error.kind().to_string(),
                message: error.to_string(),
            }),
        }
    }
}

impl From<Result<String, OutdentError>> for Response {
    fn from(result: Result<String, OutdentError>) -> Self {
        match result {
            Ok(text) => Self::text(text),
            Err(error) => Self::error(&error),
        }
    }
}
