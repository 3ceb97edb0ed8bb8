//! Field codecs of [`ApplicationCommandOptionChoice`].
//!
//! [`ApplicationCommandOptionChoice`]: super::ApplicationCommandOptionChoice

use serde_json::{Number, Value};

use super::ApplicationCommandOptionChoiceValue;
use crate::types::{
    error::ValidationError,
    field::{length_error, FieldCodec, ForceStringField, LocalizationsField},
    localization::LocaleDictionary,
    util::{char_length, WireObject},
};

/// Minimum length of a choice name.
pub const APPLICATION_COMMAND_CHOICE_NAME_LENGTH_MIN: usize = 1;
/// Maximum length of a choice name.
pub const APPLICATION_COMMAND_CHOICE_NAME_LENGTH_MAX: usize = 100;
/// Minimum length of a string choice value.
pub const APPLICATION_COMMAND_CHOICE_VALUE_LENGTH_MIN: usize = 0;
/// Maximum length of a string choice value.
pub const APPLICATION_COMMAND_CHOICE_VALUE_LENGTH_MAX: usize = 100;

pub(crate) const NAME: ForceStringField = ForceStringField::new(
    "name",
    APPLICATION_COMMAND_CHOICE_NAME_LENGTH_MIN,
    APPLICATION_COMMAND_CHOICE_NAME_LENGTH_MAX,
);
pub(crate) const NAME_LOCALIZATIONS: LocalizationsField =
    LocalizationsField::new("name_localizations");
pub(crate) const VALUE: ChoiceValueField = ChoiceValueField { key: "value" };

/// The `value` of a choice: a string, an integer or a float.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceValueField {
    /// Wire key.
    pub key: &'static str,
}

impl ChoiceValueField {
    /// Check an already typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Value`] if a string value is too long or a
    /// float is not finite.
    pub fn check(
        &self,
        value: ApplicationCommandOptionChoiceValue,
    ) -> Result<ApplicationCommandOptionChoiceValue, ValidationError> {
        match &value {
            ApplicationCommandOptionChoiceValue::String(string) => {
                let length = char_length(string);
                if length > APPLICATION_COMMAND_CHOICE_VALUE_LENGTH_MAX {
                    return Err(length_error(
                        self.key,
                        APPLICATION_COMMAND_CHOICE_VALUE_LENGTH_MIN,
                        APPLICATION_COMMAND_CHOICE_VALUE_LENGTH_MAX,
                        string,
                        length,
                    ));
                }
            }
            ApplicationCommandOptionChoiceValue::Float(float) if !float.is_finite() => {
                return Err(ValidationError::value_error(
                    self.key,
                    format!("must be a finite number, got {float}"),
                ));
            }
            _ => {}
        }

        Ok(value)
    }
}

impl FieldCodec for ChoiceValueField {
    type Value = ApplicationCommandOptionChoiceValue;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> ApplicationCommandOptionChoiceValue {
        match data.get(self.key) {
            Some(Value::String(string)) => string.clone().into(),
            Some(Value::Number(number)) => number_to_choice_value(number).unwrap_or_default(),
            _ => ApplicationCommandOptionChoiceValue::default(),
        }
    }

    fn validate(&self, value: &Value) -> Result<ApplicationCommandOptionChoiceValue, ValidationError> {
        match value {
            Value::Null => Ok(ApplicationCommandOptionChoiceValue::default()),
            Value::String(string) => self.check(string.clone().into()),
            Value::Number(number) => number_to_choice_value(number).ok_or_else(|| {
                ValidationError::value_error(
                    self.key,
                    format!("can be in range [{}:{}], got {number}", i64::MIN, i64::MAX),
                )
            }),
            other => Err(ValidationError::type_error(
                self.key,
                "`null`, `string`, `integer`, `float`",
                other,
            )),
        }
    }

    fn put_into<'a>(
        &self,
        value: &ApplicationCommandOptionChoiceValue,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject {
        if defaults || *value != ApplicationCommandOptionChoiceValue::default() {
            data.insert(self.key.to_owned(), value.to_value());
        }

        data
    }
}

/// Convert a json number, or `None` for an unsigned integer above `i64::MAX`.
fn number_to_choice_value(number: &Number) -> Option<ApplicationCommandOptionChoiceValue> {
    if let Some(integer) = number.as_i64() {
        return Some(ApplicationCommandOptionChoiceValue::Integer(integer));
    }

    if number.is_u64() {
        return None;
    }

    number.as_f64().map(ApplicationCommandOptionChoiceValue::Float)
}

// name

/// Read `name`, or `""` if missing.
pub fn parse_name(data: &WireObject) -> String {
    NAME.parse(data)
}

/// Check a user supplied `name`.
pub fn validate_name(value: &Value) -> Result<String, ValidationError> {
    NAME.validate(value)
}

/// Write `name` into `data`.
pub fn put_name_into<'a>(name: &str, data: &'a mut WireObject, defaults: bool) -> &'a mut WireObject {
    NAME.put_str_into(name, data, defaults)
}

// name_localizations

/// Read `name_localizations`, or `None` if missing or malformed.
pub fn parse_name_localizations(data: &WireObject) -> Option<LocaleDictionary> {
    NAME_LOCALIZATIONS.parse(data)
}

/// Check user supplied `name_localizations`.
pub fn validate_name_localizations(
    value: &Value,
) -> Result<Option<LocaleDictionary>, ValidationError> {
    NAME_LOCALIZATIONS.validate(value)
}

/// Write `name_localizations` into `data`.
pub fn put_name_localizations_into<'a>(
    name_localizations: &Option<LocaleDictionary>,
    data: &'a mut WireObject,
    defaults: bool,
) -> &'a mut WireObject {
    NAME_LOCALIZATIONS.put_into(name_localizations, data, defaults)
}

// value

/// Read `value`, or an empty string if missing or not representable.
pub fn parse_value(data: &WireObject) -> ApplicationCommandOptionChoiceValue {
    VALUE.parse(data)
}

/// Check a user supplied `value`.
///
/// # Errors
///
/// Returns [`ValidationError::Type`] for a non-scalar and
/// [`ValidationError::Value`] for an overlong string, a non-finite float or
/// an integer outside the `i64` range.
pub fn validate_value(value: &Value) -> Result<ApplicationCommandOptionChoiceValue, ValidationError> {
    VALUE.validate(value)
}

/// Write `value` into `data`.
pub fn put_value_into<'a>(
    value: &ApplicationCommandOptionChoiceValue,
    data: &'a mut WireObject,
    defaults: bool,
) -> &'a mut WireObject {
    VALUE.put_into(value, data, defaults)
}
