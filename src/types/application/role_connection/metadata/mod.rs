//! [`ApplicationRoleConnectionMetadata`] and its field codecs.

pub mod fields;

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use self::fields::*;
use super::ApplicationRoleConnectionMetadataType;
use crate::types::{
    builders::ApplicationRoleConnectionMetadataBuilder,
    localization::{get_localized_length, hash_locale_dictionary, LocaleDictionary},
    util::{char_length, WireObject},
};

/// A metadata field an application can require users to have to receive a
/// linked role.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApplicationRoleConnectionMetadata {
    /// Text shown under the name.
    pub description: String,
    /// Localizations of `description`.
    pub description_localizations: Option<LocaleDictionary>,
    /// Dictionary key of the metadata field.
    pub key: String,
    /// How the user's value is compared.
    pub kind: ApplicationRoleConnectionMetadataType,
    /// Display name.
    pub name: String,
    /// Localizations of `name`.
    pub name_localizations: Option<LocaleDictionary>,
}

impl ApplicationRoleConnectionMetadata {
    /// Start building a metadata record.
    pub fn builder(
        kind: ApplicationRoleConnectionMetadataType,
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ApplicationRoleConnectionMetadataBuilder {
        ApplicationRoleConnectionMetadataBuilder::new(kind, key, name, description)
    }

    /// Create a metadata record from its wire representation.
    pub fn from_data(data: &WireObject) -> Self {
        Self {
            description: parse_description(data),
            description_localizations: parse_description_localizations(data),
            key: parse_key(data),
            kind: parse_type(data),
            name: parse_name(data),
            name_localizations: parse_name_localizations(data),
        }
    }

    /// Serialize the metadata record.
    ///
    /// Fields holding their default value are only included if `defaults` is
    /// set.
    pub fn to_data(&self, defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        put_description_into(&self.description, &mut data, defaults);
        put_description_localizations_into(&self.description_localizations, &mut data, defaults);
        put_key_into(&self.key, &mut data, defaults);
        put_name_into(&self.name, &mut data, defaults);
        put_name_localizations_into(&self.name_localizations, &mut data, defaults);
        put_type_into(self.kind, &mut data, defaults);

        data
    }

    /// Update the record from `data`, returning the previous wire value of
    /// every field that changed, keyed by field name.
    pub fn update_from_data(&mut self, data: &WireObject) -> WireObject {
        let mut old_attributes = WireObject::new();

        let description = parse_description(data);
        if self.description != description {
            put_description_into(&self.description, &mut old_attributes, true);
            self.description = description;
        }

        let description_localizations = parse_description_localizations(data);
        if self.description_localizations != description_localizations {
            put_description_localizations_into(
                &self.description_localizations,
                &mut old_attributes,
                true,
            );
            self.description_localizations = description_localizations;
        }

        let key = parse_key(data);
        if self.key != key {
            put_key_into(&self.key, &mut old_attributes, true);
            self.key = key;
        }

        let kind = parse_type(data);
        if self.kind != kind {
            put_type_into(self.kind, &mut old_attributes, true);
            self.kind = kind;
        }

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

        if !old_attributes.is_empty() {
            trace!(key = %self.key, changed = old_attributes.len(), "role connection metadata updated");
        }

        old_attributes
    }

    /// Builder seeded with a copy of every field, for a modified copy.
    pub fn copy_with(&self) -> ApplicationRoleConnectionMetadataBuilder {
        ApplicationRoleConnectionMetadataBuilder::from(self.clone())
    }

    /// Characters counted against Discord's content limits: the key and the
    /// longest form of the name and the description.
    pub fn content_length(&self) -> usize {
        char_length(&self.key)
            + get_localized_length(Some(&self.name), self.name_localizations.as_ref())
            + get_localized_length(Some(&self.description), self.description_localizations.as_ref())
    }
}

impl Hash for ApplicationRoleConnectionMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
        if let Some(description_localizations) = &self.description_localizations {
            hash_locale_dictionary(description_localizations).hash(state);
        }
        self.key.hash(state);
        self.kind.hash(state);
        self.name.hash(state);
        if let Some(name_localizations) = &self.name_localizations {
            hash_locale_dictionary(name_localizations).hash(state);
        }
    }
}

impl Serialize for ApplicationRoleConnectionMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data(false).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ApplicationRoleConnectionMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireObject::deserialize(deserializer).map(|data| Self::from_data(&data))
    }
}
