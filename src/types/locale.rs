//! Discord locale codes.
//!
//! [`Locale`] is an open enumeration: the predefined locales are seeded into a
//! process-wide registry on first use, and any code Discord sends that is not
//! known yet is registered on the fly by [`Locale::get`]. Registered entries
//! are never removed, so a [`Locale`] is a cheap `Copy` handle to `'static`
//! data.

use std::{
    collections::HashMap,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    ptr,
};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use serde_json::Value;
use tracing::debug;

use crate::types::{
    error::ValidationError,
    field::{FieldCodec, Preinstanced, PreinstancedField, PreinstancedMismatch},
    util::WireObject,
};

/// Data backing a [`Locale`].
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    /// Wire code, e.g. `en-US`.
    pub value: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name of the language in itself.
    pub native_name: &'static str,
}

/// A language (and optionally region) Discord can localize text into.
///
/// Equality and hashing go by [`value`](Self::value), so two handles for the
/// same code always compare equal. Use [`is_same`](Self::is_same) to check
/// registry identity.
#[derive(Clone, Copy)]
pub struct Locale(&'static LocaleData);

macro_rules! predefined_locales {
    ($($constant:ident => ($value:literal, $name:literal, $native_name:literal),)*) => {
        impl Locale {
            $(
                #[doc = concat!($name, " (`", $value, "`).")]
                pub const $constant: Self = {
                    // One address per code, shared by the constant and the registry.
                    static DATA: LocaleData = LocaleData {
                        value: $value,
                        name: $name,
                        native_name: $native_name,
                    };
                    Self(&DATA)
                };
            )*

            /// Every locale known at build time.
            pub const PREDEFINED: &'static [Self] = &[$(Self::$constant,)*];
        }
    };
}

predefined_locales! {
    BULGARIAN => ("bg", "Bulgarian", "български"),
    CHINESE_CHINA => ("zh-CN", "Chinese, China", "中文"),
    CHINESE_TAIWAN => ("zh-TW", "Chinese, Taiwan", "繁體中文"),
    CROATIAN => ("hr", "Croatian", "Hrvatski"),
    CZECH => ("cs", "Czech", "Čeština"),
    DANISH => ("da", "Danish", "Dansk"),
    DUTCH => ("nl", "Dutch", "Nederlands"),
    ENGLISH_GB => ("en-GB", "English, UK", "English, UK"),
    ENGLISH_US => ("en-US", "English, US", "English, US"),
    FINNISH => ("fi", "Finnish", "Suomi"),
    FRENCH => ("fr", "French", "Français"),
    GERMAN => ("de", "German", "Deutsch"),
    GREEK => ("el", "Greek", "Ελληνικά"),
    HINDI => ("hi", "Hindi", "हिन्दी"),
    HUNGARIAN => ("hu", "Hungarian", "Magyar"),
    INDONESIAN => ("id", "Indonesian", "Bahasa Indonesia"),
    ITALIAN => ("it", "Italian", "Italiano"),
    JAPANESE => ("ja", "Japanese", "日本語"),
    KOREAN => ("ko", "Korean", "한국어"),
    LITHUANIAN => ("lt", "Lithuanian", "Lietuviškai"),
    NORWEGIAN => ("no", "Norwegian", "Norsk"),
    POLISH => ("pl", "Polish", "Polski"),
    PORTUGUESE_BRAZIL => ("pt-BR", "Portuguese, Brazilian", "Português do Brasil"),
    ROMANIAN => ("ro", "Romanian, Romania", "Română"),
    RUSSIAN => ("ru", "Russian", "Pусский"),
    SPANISH => ("es-ES", "Spanish", "Español"),
    SPANISH_LATAM => ("es-419", "Spanish, LATAM", "Español, LATAM"),
    SWEDISH => ("sv-SE", "Swedish", "Svenska"),
    THAI => ("th", "Thai", "ไทย"),
    TURKISH => ("tr", "Turkish", "Türkçe"),
    UKRAINIAN => ("uk", "Ukrainian", "Українська"),
    VIETNAMESE => ("vi", "Vietnamese", "Tiếng Việt"),
}

/// Locale used when none is specified. Also registered under the empty code.
pub const LOCALE_DEFAULT: Locale = Locale::ENGLISH_US;

/// Code → locale. Seeded with [`Locale::PREDEFINED`]; `""` maps to the same
/// entry as [`LOCALE_DEFAULT`].
static REGISTRY: Lazy<RwLock<HashMap<&'static str, Locale>>> = Lazy::new(|| {
    let mut registry = HashMap::with_capacity(Locale::PREDEFINED.len() + 1);

    for locale in Locale::PREDEFINED {
        registry.insert(locale.value(), *locale);
    }

    if let Some(default) = registry.get(LOCALE_DEFAULT.value()).copied() {
        registry.insert("", default);
    }

    RwLock::new(registry)
});

impl Locale {
    /// Look up the locale registered for `value`, registering a new one if the
    /// code is unknown.
    ///
    /// Locales created this way use the code itself as their name and native
    /// name. Never fails.
    pub fn get(value: &str) -> Self {
        if let Some(locale) = REGISTRY.read().get(value) {
            return *locale;
        }

        let mut registry = REGISTRY.write();

        // Another thread may have registered it between the two locks.
        if let Some(locale) = registry.get(value) {
            return *locale;
        }

        let value: &'static str = Box::leak(value.to_owned().into_boxed_str());
        let locale = Self(Box::leak(Box::new(LocaleData {
            value,
            name: value,
            native_name: value,
        })));

        debug!(locale = value, "registered unknown locale");
        registry.insert(value, locale);
        locale
    }

    /// Look up a locale without registering it.
    pub fn find(value: &str) -> Option<Self> {
        REGISTRY.read().get(value).copied()
    }

    /// Wire code of the locale.
    pub const fn value(self) -> &'static str {
        self.0.value
    }

    /// English name of the locale.
    pub const fn name(self) -> &'static str {
        self.0.name
    }

    /// Name of the locale in its own language.
    pub const fn native_name(self) -> &'static str {
        self.0.native_name
    }

    /// Whether both handles point at the same registry entry.
    pub fn is_same(self, other: Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::get("")
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Locale {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(other.value())
    }
}

impl Debug for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Locale").field(&self.value()).finish()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.value())
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::get(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.value().to_owned()
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocaleVisitor;

        impl Visitor<'_> for LocaleVisitor {
            type Value = Locale;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a locale code string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Locale::get(v))
            }
        }

        deserializer.deserialize_str(LocaleVisitor)
    }
}

impl Preinstanced for Locale {
    const EXPECTED: &'static str = "`null`, `string`";

    fn from_value(value: &Value) -> Result<Self, PreinstancedMismatch> {
        value.as_str().map(Self::get).ok_or(PreinstancedMismatch::Type)
    }

    fn to_value(self) -> Value {
        Value::String(self.value().to_owned())
    }
}

/// `locale` field of interactions and users.
pub const LOCALE: PreinstancedField<Locale> = PreinstancedField::new("locale", LOCALE_DEFAULT);

/// Parse the `locale` field, defaulting to [`LOCALE_DEFAULT`].
pub fn parse_locale(data: &WireObject) -> Locale {
    LOCALE.parse(data)
}

/// Validate a user supplied `locale`.
///
/// # Errors
///
/// Returns [`ValidationError::Type`] if the value is not a string.
pub fn validate_locale(value: &Value) -> Result<Locale, ValidationError> {
    LOCALE.validate(value)
}

/// Write `locale` into `data`.
pub fn put_locale_into(locale: Locale, data: &mut WireObject, defaults: bool) -> &mut WireObject {
    LOCALE.put_into(&locale, data, defaults)
}
