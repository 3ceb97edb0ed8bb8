//! Localization dictionaries.
//!
//! A localizable field `F` (`name`, `description`) travels with a companion
//! `F_localizations` map. Internally the map is keyed by [`Locale`]; on the
//! wire it is keyed by locale code. An empty map is never stored: it is
//! always normalized to `None`.
//!
//! The base value of `F` is the default locale's text and is never repeated
//! inside the map.

use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
};

use serde_json::Value;

use crate::types::{
    error::ValidationError,
    locale::Locale,
    util::char_length,
};

/// Localized text keyed by [`Locale`].
pub type LocaleDictionary = HashMap<Locale, String>;

/// Localized text keyed by wire locale code.
pub type WireLocaleDictionary = HashMap<String, String>;

/// Convert a wire dictionary into a [`LocaleDictionary`].
///
/// Unknown codes are registered through [`Locale::get`]. Values are taken as
/// they are. Returns `None` for a missing or empty dictionary.
pub fn build_locale_dictionary(
    dictionary: Option<&WireLocaleDictionary>,
) -> Option<LocaleDictionary> {
    let dictionary = dictionary.filter(|dictionary| !dictionary.is_empty())?;

    Some(
        dictionary
            .iter()
            .map(|(code, value)| (Locale::get(code), value.clone()))
            .collect(),
    )
}

/// Convert a [`LocaleDictionary`] back into its wire form.
pub fn destroy_locale_dictionary(
    dictionary: Option<&LocaleDictionary>,
) -> Option<WireLocaleDictionary> {
    dictionary.map(|dictionary| {
        dictionary
            .iter()
            .map(|(locale, value)| (locale.value().to_owned(), value.clone()))
            .collect()
    })
}

/// Order independent hash of a localization dictionary.
///
/// Every entry contributes `hash(code) & hash(value)`; contributions are
/// combined with xor.
pub fn hash_locale_dictionary(dictionary: &LocaleDictionary) -> u64 {
    dictionary.iter().fold(0, |hash_value, (locale, value)| {
        hash_value ^ (hash_of(locale.value()) & hash_of(value.as_str()))
    })
}

/// Length of the longest form of a localized field.
///
/// Only one translation is shown to a user at a time, so the longest of the
/// base value and its localizations is what counts against Discord's content
/// limits.
pub fn get_localized_length(
    value: Option<&str>,
    value_localizations: Option<&LocaleDictionary>,
) -> usize {
    let length = value.map_or(0, char_length);

    value_localizations
        .into_iter()
        .flat_map(HashMap::values)
        .map(|value| char_length(value))
        .fold(length, usize::max)
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Key accepted by the localized dictionary builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleKey {
    /// An already resolved locale.
    Locale(Locale),
    /// A raw locale code.
    Code(String),
}

impl LocaleKey {
    fn code(&self) -> &str {
        match self {
            Self::Locale(locale) => locale.value(),
            Self::Code(code) => code,
        }
    }

    fn into_locale(self) -> Locale {
        match self {
            Self::Locale(locale) => locale,
            Self::Code(code) => Locale::get(&code),
        }
    }

    fn into_code(self) -> String {
        match self {
            Self::Locale(locale) => locale.value().to_owned(),
            Self::Code(code) => code,
        }
    }
}

impl From<Locale> for LocaleKey {
    fn from(locale: Locale) -> Self {
        Self::Locale(locale)
    }
}

impl From<&Locale> for LocaleKey {
    fn from(locale: &Locale) -> Self {
        Self::Locale(*locale)
    }
}

impl From<&str> for LocaleKey {
    fn from(code: &str) -> Self {
        Self::Code(code.to_owned())
    }
}

impl From<String> for LocaleKey {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<&String> for LocaleKey {
    fn from(code: &String) -> Self {
        Self::Code(code.clone())
    }
}

/// Build a [`LocaleDictionary`] from user input.
///
/// Accepts any iterable of `(locale-like, text)` pairs, so maps, arrays and
/// vectors all work. Keys may be [`Locale`]s or codes. Later entries win when
/// two keys resolve to the same locale.
///
/// # Errors
///
/// Returns [`ValidationError::Value`] if a key or a value is an empty string.
pub fn localized_dictionary_builder<I, K, V>(
    raw: Option<I>,
    parameter_name: &str,
) -> Result<Option<LocaleDictionary>, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<LocaleKey>,
    V: Into<String>,
{
    build_dictionary(raw, parameter_name, LocaleKey::into_locale)
}

/// Like [`localized_dictionary_builder`], but keeps the keys as wire codes.
///
/// # Errors
///
/// Returns [`ValidationError::Value`] if a key or a value is an empty string.
pub fn serializable_localized_dictionary_builder<I, K, V>(
    raw: Option<I>,
    parameter_name: &str,
) -> Result<Option<WireLocaleDictionary>, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<LocaleKey>,
    V: Into<String>,
{
    build_dictionary(raw, parameter_name, LocaleKey::into_code)
}

/// Build a [`LocaleDictionary`] from an untyped json value.
///
/// Accepts `null`, an object of code → text, or an array of `[code, text]`
/// pairs.
///
/// # Errors
///
/// Returns [`ValidationError::Type`] if a key or value is not a string, and
/// [`ValidationError::Value`] if the value has none of the accepted shapes,
/// a pair does not have exactly two elements, or a key or value is empty.
pub fn localized_dictionary_from_value(
    raw: &Value,
    parameter_name: &str,
) -> Result<Option<LocaleDictionary>, ValidationError> {
    let entries = entries_from_value(raw, parameter_name)?;
    localized_dictionary_builder(entries, parameter_name)
}

/// Like [`localized_dictionary_from_value`], but keeps the keys as wire codes.
///
/// # Errors
///
/// Same as [`localized_dictionary_from_value`].
pub fn serializable_localized_dictionary_from_value(
    raw: &Value,
    parameter_name: &str,
) -> Result<Option<WireLocaleDictionary>, ValidationError> {
    let entries = entries_from_value(raw, parameter_name)?;
    serializable_localized_dictionary_builder(entries, parameter_name)
}

fn build_dictionary<I, K, V, T>(
    raw: Option<I>,
    parameter_name: &str,
    convert_key: fn(LocaleKey) -> T,
) -> Result<Option<HashMap<T, String>>, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<LocaleKey>,
    V: Into<String>,
    T: Eq + Hash,
{
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut dictionary = HashMap::new();

    for (key, value) in raw {
        let key: LocaleKey = key.into();
        let value: String = value.into();

        if key.code().is_empty() {
            return Err(ValidationError::value_error(
                parameter_name,
                format!("keys cannot be empty, got {:?} -> {:?}", key.code(), value),
            ));
        }

        if value.is_empty() {
            return Err(ValidationError::value_error(
                parameter_name,
                format!("values cannot be empty, got {:?} -> {:?}", key.code(), value),
            ));
        }

        dictionary.insert(convert_key(key), value);
    }

    Ok((!dictionary.is_empty()).then_some(dictionary))
}

fn entries_from_value(
    raw: &Value,
    parameter_name: &str,
) -> Result<Option<Vec<(String, String)>>, ValidationError> {
    match raw {
        Value::Null => Ok(None),
        Value::Object(object) => object
            .iter()
            .map(|(key, value)| Ok((key.clone(), text_from_value(value, parameter_name)?)))
            .collect::<Result<Vec<_>, ValidationError>>()
            .map(Some),
        Value::Array(items) => items
            .iter()
            .map(|item| pair_from_value(item, parameter_name))
            .collect::<Result<Vec<_>, ValidationError>>()
            .map(Some),
        other => Err(ValidationError::value_error(
            parameter_name,
            format!("can be `null`, `object` or `array` of pairs, got {other}"),
        )),
    }
}

fn pair_from_value(item: &Value, parameter_name: &str) -> Result<(String, String), ValidationError> {
    let Value::Array(pair) = item else {
        return Err(ValidationError::type_error(
            parameter_name,
            "`array` of `[locale, text]` pairs",
            item,
        ));
    };

    let [key, value] = pair.as_slice() else {
        return Err(ValidationError::value_error(
            parameter_name,
            format!("pairs must have exactly 2 elements, got {}; {item}", pair.len()),
        ));
    };

    let Value::String(key) = key else {
        return Err(ValidationError::type_error(
            parameter_name,
            "`string` keys",
            key,
        ));
    };

    Ok((key.clone(), text_from_value(value, parameter_name)?))
}

fn text_from_value(value: &Value, parameter_name: &str) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(ValidationError::type_error(
            parameter_name,
            "`string` values",
            other,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn wire(entries: &[(&str, &str)]) -> WireLocaleDictionary {
        entries
            .iter()
            .map(|(code, value)| ((*code).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn build_then_destroy_is_lossless() {
        let dictionary = wire(&[("nl", "aya"), ("el", "yya"), ("qq-QQ", "new")]);
        let built = build_locale_dictionary(Some(&dictionary));

        assert_eq!(destroy_locale_dictionary(built.as_ref()), Some(dictionary));
    }

    #[test]
    fn build_resolves_locales() {
        let built = build_locale_dictionary(Some(&wire(&[("nl", "aya"), ("el", "yya")])));

        assert_eq!(
            built,
            Some(LocaleDictionary::from([
                (Locale::DUTCH, "aya".to_owned()),
                (Locale::GREEK, "yya".to_owned()),
            ])),
        );
    }

    #[test]
    fn empty_normalizes_to_none() {
        assert_eq!(build_locale_dictionary(Some(&WireLocaleDictionary::new())), None);
        assert_eq!(build_locale_dictionary(None), None);
        assert_eq!(destroy_locale_dictionary(None), None);
    }

    #[test]
    fn destroy_leaves_input_untouched() {
        let dictionary = LocaleDictionary::from([(Locale::THAI, "hoi".to_owned())]);
        let copy = dictionary.clone();
        destroy_locale_dictionary(Some(&dictionary));
        assert_eq!(dictionary, copy);
    }

    #[test]
    fn hash_is_order_independent() {
        let mut a = LocaleDictionary::new();
        a.insert(Locale::DUTCH, "aya".to_owned());
        a.insert(Locale::GREEK, "yya".to_owned());
        a.insert(Locale::CZECH, "halo".to_owned());

        let mut b = LocaleDictionary::new();
        b.insert(Locale::CZECH, "halo".to_owned());
        b.insert(Locale::GREEK, "yya".to_owned());
        b.insert(Locale::DUTCH, "aya".to_owned());

        assert_eq!(a, b);
        assert_eq!(hash_locale_dictionary(&a), hash_locale_dictionary(&b));
    }

    #[test]
    fn hash_uses_and_of_key_and_value() {
        let dictionary = LocaleDictionary::from([(Locale::DUTCH, "aya".to_owned())]);
        assert_eq!(
            hash_locale_dictionary(&dictionary),
            hash_of("nl") & hash_of("aya"),
        );
    }

    #[test]
    fn localized_length_is_the_longest() {
        let localizations = LocaleDictionary::from([
            (Locale::THAI, "hoi".to_owned()),
            (Locale::CZECH, "halo".to_owned()),
        ]);

        assert_eq!(get_localized_length(Some("hi"), Some(&localizations)), 4);
        assert_eq!(get_localized_length(Some("hello there"), Some(&localizations)), 11);
        assert_eq!(get_localized_length(None, Some(&localizations)), 4);
        assert_eq!(get_localized_length(Some("hi"), None), 2);
        assert_eq!(get_localized_length(None, None), 0);
    }

    #[test]
    fn builder_accepts_mixed_keys() {
        let built = localized_dictionary_builder(
            Some([
                (LocaleKey::from(Locale::DUTCH), "aya"),
                (LocaleKey::from(Locale::GREEK.value()), "yya"),
            ]),
            "x",
        )
        .unwrap();

        assert_eq!(
            built,
            Some(LocaleDictionary::from([
                (Locale::DUTCH, "aya".to_owned()),
                (Locale::GREEK, "yya".to_owned()),
            ])),
        );
    }

    #[test]
    fn builder_none_and_empty() {
        assert_eq!(
            localized_dictionary_builder(None::<Vec<(Locale, String)>>, "x").unwrap(),
            None,
        );
        assert_eq!(
            localized_dictionary_builder(Some(Vec::<(Locale, String)>::new()), "x").unwrap(),
            None,
        );
    }

    #[test]
    fn builder_rejects_empty_strings() {
        let err = localized_dictionary_builder(Some([("en-US", "")]), "x").unwrap_err();
        assert!(err.is_value_error());
        assert_eq!(err.parameter(), "x");

        let err = localized_dictionary_builder(Some([("", "hi")]), "x").unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn builder_last_write_wins() {
        let built = localized_dictionary_builder(
            Some(vec![
                (LocaleKey::from("nl"), "first"),
                (LocaleKey::from(Locale::DUTCH), "second"),
            ]),
            "x",
        )
        .unwrap();

        assert_eq!(
            built,
            Some(LocaleDictionary::from([(Locale::DUTCH, "second".to_owned())])),
        );
    }

    #[test]
    fn serializable_builder_keeps_codes() {
        let built = serializable_localized_dictionary_builder(
            Some([
                (LocaleKey::from(Locale::DUTCH), "aya"),
                (LocaleKey::from("el"), "yya"),
            ]),
            "x",
        )
        .unwrap();

        assert_eq!(built, Some(wire(&[("nl", "aya"), ("el", "yya")])));
    }

    #[test]
    fn from_value_object_and_pairs() {
        let expected = Some(LocaleDictionary::from([
            (Locale::DUTCH, "aya".to_owned()),
            (Locale::GREEK, "yya".to_owned()),
        ]));

        assert_eq!(
            localized_dictionary_from_value(&json!({"nl": "aya", "el": "yya"}), "x").unwrap(),
            expected,
        );
        assert_eq!(
            localized_dictionary_from_value(&json!([["nl", "aya"], ["el", "yya"]]), "x").unwrap(),
            expected,
        );
        assert_eq!(localized_dictionary_from_value(&json!(null), "x").unwrap(), None);
        assert_eq!(localized_dictionary_from_value(&json!({}), "x").unwrap(), None);
    }

    #[test]
    fn from_value_errors() {
        // wrong value type
        let err = localized_dictionary_from_value(&json!({"nl": 12.6}), "x").unwrap_err();
        assert!(err.is_type_error());

        // wrong key type
        let err = localized_dictionary_from_value(&json!([[12, "aya"]]), "x").unwrap_err();
        assert!(err.is_type_error());

        // wrong arity
        let err = localized_dictionary_from_value(&json!([["nl", "aya", "yya"]]), "x").unwrap_err();
        assert!(err.is_value_error());

        // wrong shape
        let err = localized_dictionary_from_value(&json!(12.6), "x").unwrap_err();
        assert!(err.is_value_error());

        // empty value
        let err = localized_dictionary_from_value(&json!({"nl": ""}), "x").unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn serializable_from_value() {
        assert_eq!(
            serializable_localized_dictionary_from_value(&json!({"nl": "aya"}), "x").unwrap(),
            Some(wire(&[("nl", "aya")])),
        );
    }
}
