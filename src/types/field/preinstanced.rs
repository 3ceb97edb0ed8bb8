use serde_json::Value;

use super::FieldCodec;
use crate::types::{error::ValidationError, util::WireObject};

/// A value from an open set of known instances, such as a [`Locale`] or an
/// integer backed type enum.
///
/// Unknown wire values still convert into an instance. Values of the wrong
/// json type, or of the right type but outside the representable range, are
/// rejected.
///
/// [`Locale`]: crate::types::locale::Locale
pub trait Preinstanced: Copy + PartialEq {
    /// Accepted json types, for error messages.
    const EXPECTED: &'static str;

    /// Get the instance for a wire value.
    ///
    /// # Errors
    ///
    /// Returns [`PreinstancedMismatch`] describing why the value has no
    /// instance.
    fn from_value(value: &Value) -> Result<Self, PreinstancedMismatch>;

    /// Wire value of the instance.
    fn to_value(self) -> Value;
}

/// Why a wire value could not be converted into a [`Preinstanced`] instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreinstancedMismatch {
    /// The json type is not one of [`Preinstanced::EXPECTED`].
    Type,
    /// The json type is accepted but the value is out of range.
    Range(String),
}

/// A field holding a [`Preinstanced`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreinstancedField<T> {
    /// Wire key.
    pub key: &'static str,
    /// Value used when the field is missing or `null`; omitted on output.
    pub default: T,
}

impl<T: Preinstanced> PreinstancedField<T> {
    /// Describe a field under `key` defaulting to `default`.
    pub const fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }
}

impl<T: Preinstanced> FieldCodec for PreinstancedField<T> {
    type Value = T;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> T {
        data.get(self.key)
            .and_then(|value| T::from_value(value).ok())
            .unwrap_or(self.default)
    }

    fn validate(&self, value: &Value) -> Result<T, ValidationError> {
        if value.is_null() {
            return Ok(self.default);
        }

        T::from_value(value).map_err(|mismatch| match mismatch {
            PreinstancedMismatch::Type => ValidationError::type_error(self.key, T::EXPECTED, value),
            PreinstancedMismatch::Range(reason) => ValidationError::value_error(self.key, reason),
        })
    }

    fn put_into<'a>(&self, value: &T, data: &'a mut WireObject, defaults: bool) -> &'a mut WireObject {
        if defaults || *value != self.default {
            data.insert(self.key.to_owned(), value.to_value());
        }

        data
    }
}
