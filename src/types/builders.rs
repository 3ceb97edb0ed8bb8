//! Builder patterns for ergonomic, validated entity construction.
//!
//! Builders collect raw values and run every field's validation in
//! `build()`, so a half-valid entity is never observable. `copy_with` on an
//! entity returns a builder seeded with an independent copy of its fields.

use crate::types::{
    application::{
        command::{
            choice::fields as choice_fields, ApplicationCommandOptionChoice,
            ApplicationCommandOptionChoiceValue,
        },
        role_connection::{
            metadata::fields as metadata_fields, ApplicationRoleConnectionMetadata,
            ApplicationRoleConnectionMetadataType,
        },
    },
    error::ValidationError,
    field::FieldCodec,
    localization::{localized_dictionary_builder, LocaleDictionary, LocaleKey},
};

/// Localizations as handed to a builder, validated on `build()`.
type PendingLocalizations = Option<Vec<(LocaleKey, String)>>;

fn pending<I, K, V>(localizations: I) -> PendingLocalizations
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<LocaleKey>,
    V: Into<String>,
{
    Some(
        localizations
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect(),
    )
}

fn pending_from(localizations: Option<LocaleDictionary>) -> PendingLocalizations {
    localizations.map(|localizations| {
        localizations
            .into_iter()
            .map(|(locale, value)| (LocaleKey::Locale(locale), value))
            .collect()
    })
}

// ===========================================================================
// ApplicationCommandOptionChoice builder
// ===========================================================================

/// Builder for [`ApplicationCommandOptionChoice`].
///
/// # Examples
///
/// ```ignore
/// use crate::types::{builders::ApplicationCommandOptionChoiceBuilder, locale::Locale};
///
/// let choice = ApplicationCommandOptionChoiceBuilder::new("red", "#ff0000")
///     .name_localizations([(Locale::DUTCH, "rood")])
///     .build()?;
/// ```
#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct ApplicationCommandOptionChoiceBuilder {
    name: String,
    name_localizations: PendingLocalizations,
    value: ApplicationCommandOptionChoiceValue,
}

impl ApplicationCommandOptionChoiceBuilder {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<ApplicationCommandOptionChoiceValue>,
    ) -> Self {
        Self {
            name: name.into(),
            name_localizations: None,
            value: value.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the name's localizations. Keys may be [`Locale`]s or codes.
    ///
    /// [`Locale`]: crate::types::locale::Locale
    pub fn name_localizations<I, K, V>(mut self, name_localizations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<LocaleKey>,
        V: Into<String>,
    {
        self.name_localizations = pending(name_localizations);
        self
    }

    pub fn clear_name_localizations(mut self) -> Self {
        self.name_localizations = None;
        self
    }

    pub fn value(mut self, value: impl Into<ApplicationCommandOptionChoiceValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Validate every field and return the finished choice.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by a field.
    pub fn build(self) -> Result<ApplicationCommandOptionChoice, ValidationError> {
        Ok(ApplicationCommandOptionChoice {
            name: choice_fields::NAME.check(self.name)?,
            name_localizations: localized_dictionary_builder(
                self.name_localizations,
                choice_fields::NAME_LOCALIZATIONS.key(),
            )?,
            value: choice_fields::VALUE.check(self.value)?,
        })
    }
}

impl From<ApplicationCommandOptionChoice> for ApplicationCommandOptionChoiceBuilder {
    fn from(choice: ApplicationCommandOptionChoice) -> Self {
        Self {
            name: choice.name,
            name_localizations: pending_from(choice.name_localizations),
            value: choice.value,
        }
    }
}

// ===========================================================================
// ApplicationRoleConnectionMetadata builder
// ===========================================================================

/// Builder for [`ApplicationRoleConnectionMetadata`].
#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct ApplicationRoleConnectionMetadataBuilder {
    description: String,
    description_localizations: PendingLocalizations,
    key: String,
    kind: ApplicationRoleConnectionMetadataType,
    name: String,
    name_localizations: PendingLocalizations,
}

impl ApplicationRoleConnectionMetadataBuilder {
    pub fn new(
        kind: ApplicationRoleConnectionMetadataType,
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            description_localizations: None,
            key: key.into(),
            kind,
            name: name.into(),
            name_localizations: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn description_localizations<I, K, V>(mut self, description_localizations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<LocaleKey>,
        V: Into<String>,
    {
        self.description_localizations = pending(description_localizations);
        self
    }

    pub fn clear_description_localizations(mut self) -> Self {
        self.description_localizations = None;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn kind(mut self, kind: ApplicationRoleConnectionMetadataType) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name_localizations<I, K, V>(mut self, name_localizations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<LocaleKey>,
        V: Into<String>,
    {
        self.name_localizations = pending(name_localizations);
        self
    }

    pub fn clear_name_localizations(mut self) -> Self {
        self.name_localizations = None;
        self
    }

    /// Validate every field and return the finished record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by a field.
    pub fn build(self) -> Result<ApplicationRoleConnectionMetadata, ValidationError> {
        Ok(ApplicationRoleConnectionMetadata {
            description: metadata_fields::DESCRIPTION.check(self.description)?,
            description_localizations: localized_dictionary_builder(
                self.description_localizations,
                metadata_fields::DESCRIPTION_LOCALIZATIONS.key(),
            )?,
            key: metadata_fields::KEY.check(self.key)?,
            kind: self.kind,
            name: metadata_fields::NAME.check(self.name)?,
            name_localizations: localized_dictionary_builder(
                self.name_localizations,
                metadata_fields::NAME_LOCALIZATIONS.key(),
            )?,
        })
    }
}

impl From<ApplicationRoleConnectionMetadata> for ApplicationRoleConnectionMetadataBuilder {
    fn from(metadata: ApplicationRoleConnectionMetadata) -> Self {
        Self {
            description: metadata.description,
            description_localizations: pending_from(metadata.description_localizations),
            key: metadata.key,
            kind: metadata.kind,
            name: metadata.name,
            name_localizations: pending_from(metadata.name_localizations),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
