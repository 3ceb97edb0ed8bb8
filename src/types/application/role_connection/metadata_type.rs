use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::field::{Preinstanced, PreinstancedMismatch};

/// How a role connection metadata value is compared against the user's
/// value.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum ApplicationRoleConnectionMetadataType {
    /// No comparison set.
    #[default]
    None,
    IntegerLessThanOrEqual,
    IntegerGreaterThanOrEqual,
    IntegerEqual,
    IntegerNotEqual,
    DateTimeLessThanOrEqual,
    DateTimeGreaterThanOrEqual,
    BooleanEqual,
    BooleanNotEqual,
    /// Variant value is unknown to the library.
    Unknown(u8),
}

impl ApplicationRoleConnectionMetadataType {
    /// Name of the type, as used in the Discord documentation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::IntegerLessThanOrEqual => "integer less than or equal",
            Self::IntegerGreaterThanOrEqual => "integer greater than or equal",
            Self::IntegerEqual => "integer equal",
            Self::IntegerNotEqual => "integer not equal",
            Self::DateTimeLessThanOrEqual => "date time less than or equal",
            Self::DateTimeGreaterThanOrEqual => "date time greater than or equal",
            Self::BooleanEqual => "boolean equal",
            Self::BooleanNotEqual => "boolean not equal",
            Self::Unknown(_) => "undefined",
        }
    }
}

impl From<u8> for ApplicationRoleConnectionMetadataType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::IntegerLessThanOrEqual,
            2 => Self::IntegerGreaterThanOrEqual,
            3 => Self::IntegerEqual,
            4 => Self::IntegerNotEqual,
            5 => Self::DateTimeLessThanOrEqual,
            6 => Self::DateTimeGreaterThanOrEqual,
            7 => Self::BooleanEqual,
            8 => Self::BooleanNotEqual,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<ApplicationRoleConnectionMetadataType> for u8 {
    fn from(value: ApplicationRoleConnectionMetadataType) -> Self {
        match value {
            ApplicationRoleConnectionMetadataType::None => 0,
            ApplicationRoleConnectionMetadataType::IntegerLessThanOrEqual => 1,
            ApplicationRoleConnectionMetadataType::IntegerGreaterThanOrEqual => 2,
            ApplicationRoleConnectionMetadataType::IntegerEqual => 3,
            ApplicationRoleConnectionMetadataType::IntegerNotEqual => 4,
            ApplicationRoleConnectionMetadataType::DateTimeLessThanOrEqual => 5,
            ApplicationRoleConnectionMetadataType::DateTimeGreaterThanOrEqual => 6,
            ApplicationRoleConnectionMetadataType::BooleanEqual => 7,
            ApplicationRoleConnectionMetadataType::BooleanNotEqual => 8,
            ApplicationRoleConnectionMetadataType::Unknown(unknown) => unknown,
        }
    }
}

impl Preinstanced for ApplicationRoleConnectionMetadataType {
    const EXPECTED: &'static str = "`null`, `integer`";

    fn from_value(value: &Value) -> Result<Self, PreinstancedMismatch> {
        let Value::Number(number) = value else {
            return Err(PreinstancedMismatch::Type);
        };

        if !number.is_i64() && !number.is_u64() {
            return Err(PreinstancedMismatch::Type);
        }

        number
            .as_u64()
            .and_then(|value| u8::try_from(value).ok())
            .map(Self::from)
            .ok_or_else(|| PreinstancedMismatch::Range(format!("can be in range [0:255], got {number}")))
    }

    fn to_value(self) -> Value {
        Value::from(u8::from(self))
    }
}
