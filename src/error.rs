//! Error type for the loosely-typed entry points.
//!
//! The transformation itself never fails: out-of-range numbers are clamped and
//! unusable options fall back to their defaults. The only failure is a caller
//! handing over something that is not text where text is required (or not a
//! number where the blank-line limit is required).

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutdentError {
    #[error("param `{param}` must be a {expected}, was: {found}")]
    InvalidArgument {
        param: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl OutdentError {
    pub(crate) fn invalid_argument(
        param: &'static str,
        expected: &'static str,
        found: &Value,
    ) -> Self {
        Self::InvalidArgument {
            param,
            expected,
            found: json_type_name(found),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

/// Name of a JSON value's type, as reported in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_names_param_and_found_type() {
        let err = OutdentError::invalid_argument("text", "string", &json!(42));
        assert_eq!(err.to_string(), "param `text` must be a string, was: number");
        assert_eq!(err.kind(), "invalid_argument");
    }

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
        assert_eq!(json_type_name(&json!("x")), "string");
    }
}
