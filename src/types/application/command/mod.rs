//! Slash command building blocks.

pub mod choice;

pub use self::choice::{ApplicationCommandOptionChoice, ApplicationCommandOptionChoiceValue};
