//! The field codec contract every entity is built from.
//!
//! Each wire field has three independent operations:
//!
//! - `parse` reads the field from a wire object, falling back to the field's
//!   default when the key is missing, `null` or malformed. It never fails.
//! - `validate` checks an untyped user value and converts it to the field's
//!   internal type, failing with [`ValidationError::Type`] or
//!   [`ValidationError::Value`].
//! - `put_into` writes the internal value back under the wire key. The
//!   field's default is only written when `defaults` is set. The same object
//!   is returned so calls can be chained while assembling a payload.
//!
//! The descriptor structs in this module implement the contract for the
//! common field shapes; entities declare one `const` descriptor per field and
//! expose `parse_F` / `validate_F` / `put_F_into` wrappers around it.

mod flag;
mod localizations;
mod preinstanced;
mod string;

pub use self::{
    flag::BoolField,
    localizations::LocalizationsField,
    preinstanced::{Preinstanced, PreinstancedField, PreinstancedMismatch},
    string::{ForceStringField, NullableStringField},
};

use serde_json::Value;

use crate::types::{error::ValidationError, util::WireObject};

/// Parse, validate and serialize a single wire field.
pub trait FieldCodec {
    /// Internal representation of the field.
    type Value;

    /// Key of the field in wire objects.
    fn key(&self) -> &'static str;

    /// Read the field from `data`, falling back to its default.
    fn parse(&self, data: &WireObject) -> Self::Value;

    /// Convert an untyped user value into the field's internal type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Type`] if the value has an unacceptable
    /// type and [`ValidationError::Value`] if it breaks a constraint.
    fn validate(&self, value: &Value) -> Result<Self::Value, ValidationError>;

    /// Write `value` into `data`, skipping the default unless `defaults` is
    /// set.
    fn put_into<'a>(
        &self,
        value: &Self::Value,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject;
}

/// Build the error for a string whose length is out of `[min:max]`.
pub(crate) fn length_error(
    parameter: &str,
    length_min: usize,
    length_max: usize,
    value: &str,
    length: usize,
) -> ValidationError {
    ValidationError::value_error(
        parameter,
        format!("length can be in range [{length_min}:{length_max}], got {length}; {value:?}"),
    )
}
