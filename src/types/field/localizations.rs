use serde_json::Value;
use tracing::trace;

use super::FieldCodec;
use crate::types::{
    error::ValidationError,
    localization::{
        build_locale_dictionary, destroy_locale_dictionary, localized_dictionary_from_value,
        LocaleDictionary, WireLocaleDictionary,
    },
    util::{ValueExt, WireObject},
};

/// The `F_localizations` companion of a localizable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizationsField {
    /// Wire key, such as `name_localizations`.
    pub key: &'static str,
}

impl LocalizationsField {
    /// Describe a localizations field under `key`.
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl FieldCodec for LocalizationsField {
    type Value = Option<LocaleDictionary>;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> Option<LocaleDictionary> {
        let value = data.get(self.key).filter(|value| !value.is_null())?;

        match value.clone().deserialize_into::<WireLocaleDictionary>() {
            Ok(dictionary) => build_locale_dictionary(Some(&dictionary)),
            Err(error) => {
                trace!(key = self.key, %error, "dropping malformed localizations");
                None
            }
        }
    }

    fn validate(&self, value: &Value) -> Result<Option<LocaleDictionary>, ValidationError> {
        localized_dictionary_from_value(value, self.key)
    }

    fn put_into<'a>(
        &self,
        value: &Option<LocaleDictionary>,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject {
        match destroy_locale_dictionary(value.as_ref()) {
            Some(dictionary) => {
                let object = dictionary
                    .into_iter()
                    .map(|(code, value)| (code, Value::String(value)))
                    .collect();
                data.insert(self.key.to_owned(), Value::Object(object));
            }
            None if defaults => {
                data.insert(self.key.to_owned(), Value::Null);
            }
            None => {}
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldCodec, LocalizationsField};
    use crate::types::{localization::LocaleDictionary, locale::Locale, util::WireObject};
    use serde_json::json;

    const FIELD: LocalizationsField = LocalizationsField::new("name_localizations");

    fn object(value: serde_json::Value) -> WireObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parse_absent_null_and_empty() {
        assert_eq!(FIELD.parse(&object(json!({}))), None);
        assert_eq!(FIELD.parse(&object(json!({"name_localizations": null}))), None);
        assert_eq!(FIELD.parse(&object(json!({"name_localizations": {}}))), None);
    }

    #[test]
    fn parse_malformed_is_dropped() {
        assert_eq!(FIELD.parse(&object(json!({"name_localizations": [1, 2]}))), None);
    }

    #[test]
    fn parse_and_put() {
        let data = object(json!({"name_localizations": {"th": "hoi"}}));
        let parsed = FIELD.parse(&data);
        assert_eq!(
            parsed,
            Some(LocaleDictionary::from([(Locale::THAI, "hoi".to_owned())])),
        );

        assert_eq!(*FIELD.put_into(&parsed, &mut WireObject::new(), false), data);
    }

    #[test]
    fn put_none() {
        assert_eq!(*FIELD.put_into(&None, &mut WireObject::new(), false), WireObject::new());
        assert_eq!(
            *FIELD.put_into(&None, &mut WireObject::new(), true),
            object(json!({"name_localizations": null})),
        );
    }
}
