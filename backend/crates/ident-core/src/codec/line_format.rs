use super::{escaped, legacy};
use crate::{CoreError, CoreResult, Record};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// How a record is laid out on its single stored line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    /// `\N` for absent values, backslash escapes for `\`, tab, CR and LF,
    /// no trailing separator.
    #[default]
    Escaped,
    /// `NULL` for absent values, no escaping, trailing separator.
    Legacy,
}

impl LineFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Escaped => "escaped",
            Self::Legacy => "legacy",
        }
    }

    /// Serialize every schema field of `record` into one line.
    pub fn encode<T: Record>(&self, record: &T) -> String {
        let values = T::fields().iter().map(|field| field.read(record));

        match self {
            Self::Escaped => escaped::join(values.map(escaped::render).collect()),
            Self::Legacy => legacy::join(values.map(legacy::render).collect()),
        }
    }

    /// Rebuild a record from one stored line.
    ///
    /// Fails without producing a record when the segment count differs from
    /// the schema's field count or any segment cannot be converted.
    #[track_caller]
    pub fn decode<T: Record>(&self, line: &str) -> CoreResult<T> {
        let segments = match self {
            Self::Escaped => escaped::split(line)?,
            Self::Legacy => legacy::split(line),
        };

        let fields = T::fields();
        if segments.len() != fields.len() {
            return Err(CoreError::StructuralMismatch {
                expected: fields.len(),
                found: segments.len(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut record = T::default();
        for (field, segment) in fields.iter().zip(segments) {
            field.write_text(&mut record, segment.as_deref())?;
        }

        Ok(record)
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineFormat {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "escaped" => Ok(Self::Escaped),
            "legacy" => Ok(Self::Legacy),
            _ => Err(CoreError::Validation {
                message: format!("unknown line format '{s}' (expected 'escaped' or 'legacy')"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for LineFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LineFormat::from_str(&s).map_err(serde::de::Error::custom)
    }
}
