//! Errors raised while validating user supplied field values.
//!
//! Parsing wire data never fails: missing or `null` fields resolve to their
//! defaults. Only the `validate_*` layer (builders and `copy_with`) produces
//! a [`ValidationError`].

use thiserror::Error;

/// Reason a user supplied value was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value has a type the field cannot accept.
    #[error("`{parameter}` can be {expected}, got {received}")]
    Type {
        /// Name of the parameter that was validated.
        parameter: String,
        /// Human readable description of the accepted types.
        expected: &'static str,
        /// Type name of the received value.
        received: &'static str,
    },
    /// The type is acceptable but the value breaks a length, range or shape
    /// constraint.
    #[error("`{parameter}` {reason}")]
    Value {
        /// Name of the parameter that was validated.
        parameter: String,
        /// What constraint was broken, including the offending value.
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn type_error(
        parameter: impl Into<String>,
        expected: &'static str,
        received: &serde_json::Value,
    ) -> Self {
        Self::Type {
            parameter: parameter.into(),
            expected,
            received: json_type_name(received),
        }
    }

    pub(crate) fn value_error(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Value {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a [`ValidationError::Type`].
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// Whether this is a [`ValidationError::Value`].
    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Name of the parameter the error was raised for.
    pub fn parameter(&self) -> &str {
        match self {
            Self::Type { parameter, .. } | Self::Value { parameter, .. } => parameter,
        }
    }
}

/// Name of a json value's type, for error messages.
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use serde_json::json;

    #[test]
    fn type_error_display() {
        let err = ValidationError::type_error("name", "`string`", &json!(12.6));
        assert_eq!(err.to_string(), "`name` can be `string`, got number");
        assert!(err.is_type_error());
        assert_eq!(err.parameter(), "name");
    }

    #[test]
    fn value_error_display() {
        let err = ValidationError::value_error("key", "length can be in range [1:50], got 0; \"\"");
        assert_eq!(
            err.to_string(),
            "`key` length can be in range [1:50], got 0; \"\""
        );
        assert!(err.is_value_error());
    }
}
