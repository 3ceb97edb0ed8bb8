//! Helpers for working with wire payloads held as [`serde_json::Value`].

use serde_json::{Map, Value};

/// A json object as received from, or sent to, Discord.
pub type WireObject = Map<String, Value>;

/// Extension trait on [`serde_json::Value`] that provides
/// `.deserialize_into::<T>()`.
///
/// # Example
///
/// ```ignore
/// use serde_json::Value;
/// use crate::types::util::ValueExt;
///
/// let v: Value = serde_json::json!({"nl": "aya"});
/// let map: HashMap<String, String> = v.deserialize_into().unwrap();
/// ```
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error>;
}

impl ValueExt for Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}

/// Number of characters in `value`, the unit Discord's length limits use.
pub(crate) fn char_length(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::{char_length, ValueExt};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn deserialize_into_map() {
        let map: HashMap<String, String> = json!({"nl": "aya"}).deserialize_into().unwrap();
        assert_eq!(map.get("nl").map(String::as_str), Some("aya"));
    }

    #[test]
    fn deserialize_into_wrong_shape() {
        assert!(json!([1, 2]).deserialize_into::<HashMap<String, String>>().is_err());
    }

    #[test]
    fn char_length_counts_characters() {
        assert_eq!(char_length("ไทย"), 3);
        assert_eq!(char_length(""), 0);
    }
}
