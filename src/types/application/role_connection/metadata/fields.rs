//! Field codecs of [`ApplicationRoleConnectionMetadata`].
//!
//! [`ApplicationRoleConnectionMetadata`]: super::ApplicationRoleConnectionMetadata

use serde_json::Value;

use super::super::ApplicationRoleConnectionMetadataType;
use crate::types::{
    error::ValidationError,
    field::{FieldCodec, ForceStringField, LocalizationsField, PreinstancedField},
    localization::LocaleDictionary,
    util::WireObject,
};

/// Minimum length of a metadata key.
pub const APPLICATION_ROLE_CONNECTION_METADATA_KEY_LENGTH_MIN: usize = 1;
/// Maximum length of a metadata key.
pub const APPLICATION_ROLE_CONNECTION_METADATA_KEY_LENGTH_MAX: usize = 50;
/// Minimum length of a metadata name.
pub const APPLICATION_ROLE_CONNECTION_METADATA_NAME_LENGTH_MIN: usize = 1;
/// Maximum length of a metadata name.
pub const APPLICATION_ROLE_CONNECTION_METADATA_NAME_LENGTH_MAX: usize = 100;
/// Minimum length of a metadata description.
pub const APPLICATION_ROLE_CONNECTION_METADATA_DESCRIPTION_LENGTH_MIN: usize = 1;
/// Maximum length of a metadata description.
pub const APPLICATION_ROLE_CONNECTION_METADATA_DESCRIPTION_LENGTH_MAX: usize = 200;

pub(crate) const DESCRIPTION: ForceStringField = ForceStringField::new(
    "description",
    APPLICATION_ROLE_CONNECTION_METADATA_DESCRIPTION_LENGTH_MIN,
    APPLICATION_ROLE_CONNECTION_METADATA_DESCRIPTION_LENGTH_MAX,
);
pub(crate) const DESCRIPTION_LOCALIZATIONS: LocalizationsField =
    LocalizationsField::new("description_localizations");
pub(crate) const KEY: ForceStringField = ForceStringField::new(
    "key",
    APPLICATION_ROLE_CONNECTION_METADATA_KEY_LENGTH_MIN,
    APPLICATION_ROLE_CONNECTION_METADATA_KEY_LENGTH_MAX,
);
pub(crate) const NAME: ForceStringField = ForceStringField::new(
    "name",
    APPLICATION_ROLE_CONNECTION_METADATA_NAME_LENGTH_MIN,
    APPLICATION_ROLE_CONNECTION_METADATA_NAME_LENGTH_MAX,
);
pub(crate) const NAME_LOCALIZATIONS: LocalizationsField =
    LocalizationsField::new("name_localizations");
pub(crate) const TYPE: PreinstancedField<ApplicationRoleConnectionMetadataType> =
    PreinstancedField::new("type", ApplicationRoleConnectionMetadataType::None);

// description

/// Read `description`, or `""` if missing.
pub fn parse_description(data: &WireObject) -> String {
    DESCRIPTION.parse(data)
}

/// Check a user supplied `description`.
pub fn validate_description(value: &Value) -> Result<String, ValidationError> {
    DESCRIPTION.validate(value)
}

/// Write `description` into `data`.
pub fn put_description_into<'a>(
    description: &str,
    data: &'a mut WireObject,
    defaults: bool,
) -> &'a mut WireObject {
    DESCRIPTION.put_str_into(description, data, defaults)
}

// description_localizations

/// Read `description_localizations`, or `None` if missing or malformed.
pub fn parse_description_localizations(data: &WireObject) -> Option<LocaleDictionary> {
    DESCRIPTION_LOCALIZATIONS.parse(data)
}

/// Check user supplied `description_localizations`.
pub fn validate_description_localizations(
    value: &Value,
) -> Result<Option<LocaleDictionary>, ValidationError> {
    DESCRIPTION_LOCALIZATIONS.validate(value)
}

/// Write `description_localizations` into `data`.
pub fn put_description_localizations_into<'a>(
    description_localizations: &Option<LocaleDictionary>,
    data: &'a mut WireObject,
    defaults: bool,
) -> &'a mut WireObject {
    DESCRIPTION_LOCALIZATIONS.put_into(description_localizations, data, defaults)
}

// key

/// Read `key`, or `""` if missing.
pub fn parse_key(data: &WireObject) -> String {
    KEY.parse(data)
}

/// Check a user supplied `key`.
pub fn validate_key(value: &Value) -> Result<String, ValidationError> {
    KEY.validate(value)
}

/// Write `key` into `data`.
pub fn put_key_into<'a>(key: &str, data: &'a mut WireObject, defaults: bool) -> &'a mut WireObject {
    KEY.put_str_into(key, data, defaults)
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

// type

/// Read `type`, defaulting to [`ApplicationRoleConnectionMetadataType::None`].
pub fn parse_type(data: &WireObject) -> ApplicationRoleConnectionMetadataType {
    TYPE.parse(data)
}

/// Check a user supplied `type`.
///
/// # Errors
///
/// Returns [`ValidationError::Type`] for a non-integer and
/// [`ValidationError::Value`] for an integer outside `[0:255]`.
pub fn validate_type(value: &Value) -> Result<ApplicationRoleConnectionMetadataType, ValidationError> {
    TYPE.validate(value)
}

/// Write `type` into `data`.
pub fn put_type_into(
    kind: ApplicationRoleConnectionMetadataType,
    data: &mut WireObject,
    defaults: bool,
) -> &mut WireObject {
    TYPE.put_into(&kind, data, defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::locale::Locale;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> WireObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn description_localizations_round_trip() {
        let data = object(json!({"description_localizations": {"nl": "aya", "el": "yya"}}));

        let parsed = parse_description_localizations(&data);
        assert_eq!(
            parsed,
            Some(LocaleDictionary::from([
                (Locale::DUTCH, "aya".to_owned()),
                (Locale::GREEK, "yya".to_owned()),
            ])),
        );

        let mut output = WireObject::new();
        put_description_localizations_into(&parsed, &mut output, false);
        assert_eq!(output, data);
    }

    #[test]
    fn description_localizations_default_suppression() {
        assert_eq!(
            *put_description_localizations_into(&None, &mut WireObject::new(), false),
            WireObject::new(),
        );
        assert_eq!(
            *put_description_localizations_into(&None, &mut WireObject::new(), true),
            object(json!({"description_localizations": null})),
        );
    }

    #[test]
    fn validate_description_localizations_taxonomy() {
        assert!(validate_description_localizations(&json!({"nl": 1}))
            .unwrap_err()
            .is_type_error());
        assert!(validate_description_localizations(&json!({"nl": ""}))
            .unwrap_err()
            .is_value_error());
        assert_eq!(validate_description_localizations(&json!([])).unwrap(), None);
    }

    #[test]
    fn key_bounds() {
        assert!(validate_key(&json!("")).unwrap_err().is_value_error());
        assert!(validate_key(&json!("a".repeat(51))).unwrap_err().is_value_error());
        assert_eq!(validate_key(&json!("level")).unwrap(), "level");
        assert!(validate_key(&json!(["level"])).unwrap_err().is_type_error());
    }

    #[test]
    fn type_defaults() {
        assert_eq!(parse_type(&WireObject::new()), ApplicationRoleConnectionMetadataType::None);
        assert!(put_type_into(ApplicationRoleConnectionMetadataType::None, &mut WireObject::new(), false)
            .is_empty());
        assert_eq!(
            *put_type_into(ApplicationRoleConnectionMetadataType::None, &mut WireObject::new(), true),
            object(json!({"type": 0})),
        );
        assert!(validate_type(&json!("3")).unwrap_err().is_type_error());
    }

    #[test]
    fn type_out_of_range_is_value_error() {
        for raw in [json!(256), json!(-1)] {
            let error = validate_type(&raw).unwrap_err();
            assert!(error.is_value_error(), "{raw}");
            assert_eq!(error.parameter(), "type");
        }
        assert_eq!(
            validate_type(&json!(255)).unwrap(),
            ApplicationRoleConnectionMetadataType::Unknown(255),
        );
    }

    #[test]
    fn chained_puts_share_one_object() {
        let mut data = WireObject::new();
        put_name_into("aya", &mut data, false);
        put_key_into("level", &mut data, false);
        put_description_into("yya", &mut data, false);

        assert_eq!(data, object(json!({"name": "aya", "key": "level", "description": "yya"})));
    }
}
