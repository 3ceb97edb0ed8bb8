//! Discord application command data model.
//!
//! Every entity here is a plain record assembled from per-field codecs (see
//! [`field`]). Fields with per-locale translations carry a companion
//! `*_localizations` map handled by [`localization`].
//!
//! # Layout
//!
//! | Module | Contents |
//! |---|---|
//! | [`locale`] | Open registry of Discord locale codes |
//! | [`localization`] | Locale dictionary conversion, hashing and length accounting |
//! | [`field`] | The `parse` / `validate` / `put_into` contract and reusable field shapes |
//! | [`application`] | Command option choices and role connection metadata |
//! | [`builders`] | Validated builders for the entities |

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Application command entities.
pub mod application;

/// Builder patterns for validated construction.
pub mod builders;

/// Validation errors.
pub mod error;

/// Field codec contract.
pub mod field;

/// Discord locale codes.
pub mod locale;

/// Localization dictionaries.
pub mod localization;

/// Wire payload helpers.
pub mod util;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

// ---- Locales --------------------------------------------------------------
pub use self::locale::{Locale, LOCALE_DEFAULT};
pub use self::localization::{
    build_locale_dictionary, destroy_locale_dictionary, get_localized_length,
    hash_locale_dictionary, localized_dictionary_builder, localized_dictionary_from_value,
    serializable_localized_dictionary_builder, serializable_localized_dictionary_from_value,
    LocaleDictionary, LocaleKey, WireLocaleDictionary,
};

// ---- Field codecs ---------------------------------------------------------
pub use self::error::ValidationError;
pub use self::field::FieldCodec;
pub use self::util::WireObject;

// ---- Entities -------------------------------------------------------------
pub use self::application::command::{
    ApplicationCommandOptionChoice, ApplicationCommandOptionChoiceValue,
};
pub use self::application::role_connection::{
    ApplicationRoleConnectionMetadata, ApplicationRoleConnectionMetadataType,
};

// ---- Builders -------------------------------------------------------------
pub use self::builders::{
    ApplicationCommandOptionChoiceBuilder, ApplicationRoleConnectionMetadataBuilder,
};
