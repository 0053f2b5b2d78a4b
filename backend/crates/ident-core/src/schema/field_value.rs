use crate::{CoreError, CoreResult, FieldKind};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// A present field value. Absence is modelled as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Uuid(Uuid),
    Integer(i32),
    /// Display form of a value whose kind has no text conversion.
    Other(String),
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => FieldKind::Text.as_str(),
            Self::Uuid(_) => FieldKind::Uuid.as_str(),
            Self::Integer(_) => FieldKind::Integer.as_str(),
            Self::Other(_) => "other",
        }
    }

    /// Convert stored text into a value of the declared kind.
    #[track_caller]
    pub fn parse(field: &'static str, kind: FieldKind, text: &str) -> CoreResult<Self> {
        match kind {
            FieldKind::Text => Ok(Self::Text(text.to_string())),
            FieldKind::Uuid => Uuid::parse_str(text).map(Self::Uuid).map_err(|e| {
                CoreError::InvalidFieldValue {
                    field,
                    value: text.to_string(),
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }),
            FieldKind::Integer => text.parse::<i32>().map(Self::Integer).map_err(|e| {
                CoreError::InvalidFieldValue {
                    field,
                    value: text.to_string(),
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }),
            FieldKind::Other(type_name) => Err(CoreError::UnsupportedFieldType {
                field,
                type_name,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Unwrap a value for a field that cannot be absent.
    #[track_caller]
    pub fn require(value: Option<Self>, field: &'static str) -> CoreResult<Self> {
        value.ok_or_else(|| CoreError::MissingValue {
            field,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn into_text(self, field: &'static str) -> CoreResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(other.mismatch(field, FieldKind::Text)),
        }
    }

    #[track_caller]
    pub fn into_uuid(self, field: &'static str) -> CoreResult<Uuid> {
        match self {
            Self::Uuid(id) => Ok(id),
            other => Err(other.mismatch(field, FieldKind::Uuid)),
        }
    }

    #[track_caller]
    pub fn into_integer(self, field: &'static str) -> CoreResult<i32> {
        match self {
            Self::Integer(value) => Ok(value),
            other => Err(other.mismatch(field, FieldKind::Integer)),
        }
    }

    #[track_caller]
    fn mismatch(&self, field: &'static str, expected: FieldKind) -> CoreError {
        CoreError::FieldTypeMismatch {
            field,
            expected: expected.as_str(),
            found: self.kind_name(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Other(text) => f.write_str(text),
            Self::Uuid(id) => write!(f, "{}", id.hyphenated()),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Uuid> for FieldValue {
    fn from(id: Uuid) -> Self {
        Self::Uuid(id)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}
