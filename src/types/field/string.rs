use serde_json::Value;

use super::{length_error, FieldCodec};
use crate::types::{
    error::ValidationError,
    util::{char_length, WireObject},
};

/// A string field that is always present, defaulting to `""`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForceStringField {
    /// Wire key.
    pub key: &'static str,
    /// Minimum length in characters.
    pub length_min: usize,
    /// Maximum length in characters.
    pub length_max: usize,
}

impl ForceStringField {
    /// Describe a field under `key` accepting `[length_min:length_max]`
    /// characters.
    pub const fn new(key: &'static str, length_min: usize, length_max: usize) -> Self {
        Self {
            key,
            length_min,
            length_max,
        }
    }

    /// Check the length of an already typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Value`] if the value is too short or too
    /// long.
    pub fn check(&self, value: String) -> Result<String, ValidationError> {
        let length = char_length(&value);

        if length < self.length_min || length > self.length_max {
            return Err(length_error(
                self.key,
                self.length_min,
                self.length_max,
                &value,
                length,
            ));
        }

        Ok(value)
    }

    /// [`FieldCodec::put_into`] for a borrowed string.
    pub fn put_str_into<'a>(
        &self,
        value: &str,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject {
        if defaults || !value.is_empty() {
            data.insert(self.key.to_owned(), Value::String(value.to_owned()));
        }

        data
    }
}

impl FieldCodec for ForceStringField {
    type Value = String;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> String {
        data.get(self.key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }

    fn validate(&self, value: &Value) -> Result<String, ValidationError> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(value) => self.check(value.clone()),
            other => Err(ValidationError::type_error(self.key, "`null`, `string`", other)),
        }
    }

    fn put_into<'a>(
        &self,
        value: &String,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject {
        self.put_str_into(value, data, defaults)
    }
}

/// An optional string field, `None` when missing, `null` or empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullableStringField {
    /// Wire key.
    pub key: &'static str,
    /// Minimum length in characters of a present value.
    pub length_min: usize,
    /// Maximum length in characters.
    pub length_max: usize,
}

impl NullableStringField {
    /// Describe a field under `key` accepting `[length_min:length_max]`
    /// characters when set.
    pub const fn new(key: &'static str, length_min: usize, length_max: usize) -> Self {
        Self {
            key,
            length_min,
            length_max,
        }
    }
}

impl FieldCodec for NullableStringField {
    type Value = Option<String>;

    fn key(&self) -> &'static str {
        self.key
    }

    fn parse(&self, data: &WireObject) -> Option<String> {
        data.get(self.key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    fn validate(&self, value: &Value) -> Result<Option<String>, ValidationError> {
        let value = match value {
            Value::Null => return Ok(None),
            Value::String(value) if value.is_empty() => return Ok(None),
            Value::String(value) => value,
            other => return Err(ValidationError::type_error(self.key, "`null`, `string`", other)),
        };

        let length = char_length(value);
        if length < self.length_min || length > self.length_max {
            return Err(length_error(self.key, self.length_min, self.length_max, value, length));
        }

        Ok(Some(value.clone()))
    }

    fn put_into<'a>(
        &self,
        value: &Option<String>,
        data: &'a mut WireObject,
        defaults: bool,
    ) -> &'a mut WireObject {
        match value {
            Some(value) => {
                data.insert(self.key.to_owned(), Value::String(value.clone()));
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
    use super::{FieldCodec, ForceStringField, NullableStringField};
    use serde_json::json;

    const FIELD: ForceStringField = ForceStringField::new("name", 1, 5);

    fn object(value: serde_json::Value) -> crate::types::util::WireObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parse() {
        assert_eq!(FIELD.parse(&object(json!({"name": "ayaya"}))), "ayaya");
        assert_eq!(FIELD.parse(&object(json!({"name": null}))), "");
        assert_eq!(FIELD.parse(&object(json!({}))), "");
    }

    #[test]
    fn validate() {
        assert_eq!(FIELD.validate(&json!(null)).unwrap(), "");
        assert_eq!(FIELD.validate(&json!("aya")).unwrap(), "aya");
        assert!(FIELD.validate(&json!("")).unwrap_err().is_value_error());
        assert!(FIELD.validate(&json!("ayayaya")).unwrap_err().is_value_error());
        assert!(FIELD.validate(&json!(12.6)).unwrap_err().is_type_error());
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(FIELD.check("ไทยไทย".chars().take(5).collect()).unwrap(), "ไทยไท");
    }

    #[test]
    fn put_into() {
        let mut data = object(json!({}));
        FIELD.put_into(&String::new(), &mut data, false);
        assert_eq!(data, object(json!({})));

        FIELD.put_into(&String::new(), &mut data, true);
        assert_eq!(data, object(json!({"name": ""})));

        FIELD.put_into(&"aya".to_owned(), &mut data, false);
        assert_eq!(data, object(json!({"name": "aya"})));
    }

    const NULLABLE: NullableStringField = NullableStringField::new("description", 2, 5);

    #[test]
    fn nullable_parse() {
        assert_eq!(NULLABLE.parse(&object(json!({"description": "aya"}))).as_deref(), Some("aya"));
        assert_eq!(NULLABLE.parse(&object(json!({"description": ""}))), None);
        assert_eq!(NULLABLE.parse(&object(json!({"description": 12}))), None);
        assert_eq!(NULLABLE.parse(&object(json!({}))), None);
    }

    #[test]
    fn nullable_validate() {
        assert_eq!(NULLABLE.validate(&json!(null)).unwrap(), None);
        assert_eq!(NULLABLE.validate(&json!("")).unwrap(), None);
        assert_eq!(NULLABLE.validate(&json!("aya")).unwrap().as_deref(), Some("aya"));
        assert!(NULLABLE.validate(&json!("a")).unwrap_err().is_value_error());
        assert!(NULLABLE.validate(&json!("ayayaya")).unwrap_err().is_value_error());
        assert!(NULLABLE.validate(&json!(false)).unwrap_err().is_type_error());
    }

    #[test]
    fn nullable_put_into() {
        assert!(NULLABLE.put_into(&None, &mut object(json!({})), false).is_empty());
        assert_eq!(
            *NULLABLE.put_into(&None, &mut object(json!({})), true),
            object(json!({"description": null})),
        );
        assert_eq!(
            *NULLABLE.put_into(&Some("aya".to_owned()), &mut object(json!({})), false),
            object(json!({"description": "aya"})),
        );
    }
}
