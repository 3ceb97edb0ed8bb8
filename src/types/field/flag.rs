use serde_json::Value;

use super::FieldCodec;
use crate::types::{error::ValidationError, util::WireObject};

/// A boolean field with a default, omitted from output when it holds the
/// default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoolField {
    /// Wire key.
    pub key: &'static str,
    /// Value used when the field is missing, `null` or not a boolean.
    pub default: bool,
}

impl BoolField {
    /// Describe a field under `key` defaulting to `default`.
    pub const fn new(key: &'static str, default: bool) -> Self {
        Self { key, default }
    }
}

impl FieldCodec for BoolField {
    type Value = bool;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> bool {
        data.get(self.key)
            .and_then(Value::as_bool)
            .unwrap_or(self.default)
    }

    fn validate(&self, value: &Value) -> Result<bool, ValidationError> {
        match value {
            Value::Null => Ok(self.default),
            Value::Bool(value) => Ok(*value),
            other => Err(ValidationError::type_error(self.key, "`null`, `bool`", other)),
        }
    }

    fn put_into<'a>(&self, value: &bool, data: &'a mut WireObject, defaults: bool) -> &'a mut WireObject {
        if defaults || *value != self.default {
            data.insert(self.key.to_owned(), Value::Bool(*value));
        }

        data
    }
}
