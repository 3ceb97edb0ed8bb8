//! [`ApplicationCommandOptionChoice`] and its field codecs.

pub mod fields;

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use self::fields::*;
use crate::types::{
    builders::ApplicationCommandOptionChoiceBuilder,
    localization::{get_localized_length, hash_locale_dictionary, LocaleDictionary},
    util::{char_length, WireObject},
};

/// Value of an [`ApplicationCommandOptionChoice`].
///
/// Floats compare and hash by their bit pattern.
#[derive(Clone, Debug)]
pub enum ApplicationCommandOptionChoiceValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl ApplicationCommandOptionChoiceValue {
    pub(crate) fn to_value(&self) -> Value {
        match self {
            Self::String(string) => Value::String(string.clone()),
            Self::Integer(integer) => Value::from(*integer),
            Self::Float(float) => Value::from(*float),
        }
    }
}

impl Default for ApplicationCommandOptionChoiceValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl PartialEq for ApplicationCommandOptionChoiceValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for ApplicationCommandOptionChoiceValue {}

impl Hash for ApplicationCommandOptionChoiceValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::String(string) => string.hash(state),
            Self::Integer(integer) => integer.hash(state),
            Self::Float(float) => float.to_bits().hash(state),
        }
    }
}

impl Display for ApplicationCommandOptionChoiceValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::String(string) => f.write_str(string),
            Self::Integer(integer) => Display::fmt(integer, f),
            Self::Float(float) => Display::fmt(float, f),
        }
    }
}

impl From<String> for ApplicationCommandOptionChoiceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ApplicationCommandOptionChoiceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for ApplicationCommandOptionChoiceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ApplicationCommandOptionChoiceValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ApplicationCommandOptionChoiceValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A predefined value a user can pick for a string, integer or number option.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApplicationCommandOptionChoice {
    /// Display name, 1-100 characters.
    pub name: String,
    /// Localizations of `name`.
    pub name_localizations: Option<LocaleDictionary>,
    /// Value sent back when the choice is picked.
    pub value: ApplicationCommandOptionChoiceValue,
}

impl ApplicationCommandOptionChoice {
    /// Start building a choice.
    pub fn builder(
        name: impl Into<String>,
        value: impl Into<ApplicationCommandOptionChoiceValue>,
    ) -> ApplicationCommandOptionChoiceBuilder {
        ApplicationCommandOptionChoiceBuilder::new(name, value)
    }

    pub fn from_data(data: &WireObject) -> Self {
        Self {
            name: parse_name(data),
            name_localizations: parse_name_localizations(data),
            value: parse_value(data),
        }
    }

    pub fn to_data(&self, defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        put_name_into(&self.name, &mut data, defaults);
        put_name_localizations_into(&self.name_localizations, &mut data, defaults);
        put_value_into(&self.value, &mut data, defaults);

        data
    }

    /// Update the choice from `data`, returning the previous wire value of
    /// every field that changed.
    pub fn update_from_data(&mut self, data: &WireObject) -> WireObject {
        let mut old_attributes = WireObject::new();

        let name = parse_name(data);
        if self.name != name {
            put_name_into(&self.name, &mut old_attributes, true);
            self.name = name;
        }

        let name_localizations = parse_name_localizations(data);
        if self.name_localizations != name_localizations {
            put_name_localizations_into(&self.name_localizations, &mut old_attributes, true);
            self.name_localizations = name_localizations;
        }

        let value = parse_value(data);
        if self.value != value {
            put_value_into(&self.value, &mut old_attributes, true);
            self.value = value;
        }

        if !old_attributes.is_empty() {
            trace!(name = %self.name, changed = old_attributes.len(), "choice updated");
        }

        old_attributes
    }

    pub fn copy_with(&self) -> ApplicationCommandOptionChoiceBuilder {
        ApplicationCommandOptionChoiceBuilder::from(self.clone())
    }

    /// The longest form of the name plus the length of the value's text.
    pub fn content_length(&self) -> usize {
        get_localized_length(Some(&self.name), self.name_localizations.as_ref())
            + char_length(&self.value.to_string())
    }
}

impl Hash for ApplicationCommandOptionChoice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        if let Some(name_localizations) = &self.name_localizations {
            hash_locale_dictionary(name_localizations).hash(state);
        }
        self.value.hash(state);
    }
}

impl Serialize for ApplicationCommandOptionChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data(false).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandOptionChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireObject::deserialize(deserializer).map(|data| Self::from_data(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::locale::Locale;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(ApplicationCommandOptionChoice: Clone, Debug, Eq, Hash, Send, Sync);
    assert_impl_all!(ApplicationCommandOptionChoiceValue: Clone, Debug, Eq, Hash, Send, Sync);

    fn object(value: Value) -> WireObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn from_data() {
        let choice = ApplicationCommandOptionChoice::from_data(&object(json!({
            "name": "owo",
            "name_localizations": {"nl": "aya", "el": "yya"},
            "value": 56,
        })));

        assert_eq!(choice.name, "owo");
        assert_eq!(
            choice.name_localizations,
            Some(LocaleDictionary::from([
                (Locale::DUTCH, "aya".to_owned()),
                (Locale::GREEK, "yya".to_owned()),
            ])),
        );
        assert_eq!(choice.value, ApplicationCommandOptionChoiceValue::Integer(56));
    }

    #[test]
    fn to_data() {
        let choice = ApplicationCommandOptionChoice::builder("owo", "uwu")
            .name_localizations([(Locale::DUTCH, "aya")])
            .build()
            .unwrap();

        assert_eq!(
            choice.to_data(false),
            object(json!({
                "name": "owo",
                "name_localizations": {"nl": "aya"},
                "value": "uwu",
            })),
        );
    }

    #[test]
    fn to_data_defaults() {
        let choice = ApplicationCommandOptionChoice::builder("owo", "uwu").build().unwrap();

        assert_eq!(choice.to_data(false), object(json!({"name": "owo", "value": "uwu"})));
        assert_eq!(
            choice.to_data(true),
            object(json!({"name": "owo", "name_localizations": null, "value": "uwu"})),
        );
    }

    #[test]
    fn build_rejects_bad_values() {
        let err = ApplicationCommandOptionChoice::builder("", "uwu").build().unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(err.parameter(), "name");

        let err = ApplicationCommandOptionChoice::builder("owo", "u".repeat(101))
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), "value");

        let err = ApplicationCommandOptionChoice::builder("owo", f64::NAN)
            .build()
            .unwrap_err();
        assert!(err.is_value_error());

        let err = ApplicationCommandOptionChoice::builder("owo", 1)
            .name_localizations([(Locale::DUTCH, "")])
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), "name_localizations");
    }

    #[test]
    fn update_from_data() {
        let mut choice = ApplicationCommandOptionChoice::builder("owo", 1).build().unwrap();

        let old_attributes = choice.update_from_data(&object(json!({
            "name": "owo",
            "name_localizations": {"th": "hoi"},
            "value": 2.5,
        })));

        assert_eq!(
            old_attributes,
            object(json!({"name_localizations": null, "value": 1})),
        );
        assert_eq!(choice.value, ApplicationCommandOptionChoiceValue::Float(2.5));
        assert_eq!(
            choice.name_localizations,
            Some(LocaleDictionary::from([(Locale::THAI, "hoi".to_owned())])),
        );
    }

    #[test]
    fn copy_with() {
        let choice = ApplicationCommandOptionChoice::builder("owo", "uwu")
            .name_localizations([(Locale::DUTCH, "aya")])
            .build()
            .unwrap();

        let copy = choice.copy_with().value(12).build().unwrap();
        assert_eq!(copy.name, "owo");
        assert_eq!(copy.name_localizations, choice.name_localizations);
        assert_eq!(copy.value, ApplicationCommandOptionChoiceValue::Integer(12));

        let cleared = choice.copy_with().clear_name_localizations().build().unwrap();
        assert_eq!(cleared.name_localizations, None);
        assert!(choice.name_localizations.is_some());
    }

    #[test]
    fn content_length() {
        let choice = ApplicationCommandOptionChoice::builder("hi", 1234)
            .name_localizations([(Locale::THAI, "hoi"), (Locale::CZECH, "halo")])
            .build()
            .unwrap();

        assert_eq!(choice.content_length(), 4 + 4);
    }

    #[test]
    fn serde_json_round_trip() {
        let choice = ApplicationCommandOptionChoice::builder("owo", 12.5).build().unwrap();
        let json = serde_json::to_string(&choice).unwrap();
        let parsed: ApplicationCommandOptionChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, choice);
    }
}
