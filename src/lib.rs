//! Data model for Discord application commands.
//!
//! Entities parse from and serialize to Discord's wire json through a uniform
//! per-field codec contract, and carry localized variants of their `name` and
//! `description` as [`LocaleDictionary`] maps keyed by an open [`Locale`]
//! registry.
//!
//! ```ignore
//! use discord_command_model::types::*;
//!
//! let choice = ApplicationCommandOptionChoice::builder("red", "#ff0000")
//!     .name_localizations([(Locale::DUTCH, "rood")])
//!     .build()?;
//!
//! let data = choice.to_data(false);
//! assert_eq!(ApplicationCommandOptionChoice::from_data(&data), choice);
//! ```
//!
//! [`Locale`]: types::Locale
//! [`LocaleDictionary`]: types::LocaleDictionary

pub mod types;
