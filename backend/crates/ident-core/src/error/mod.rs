use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Structural mismatch: record has {expected} fields but line has {found} segments {location}"
    )]
    StructuralMismatch {
        expected: usize,
        found: usize,
        location: ErrorLocation,
    },

    #[error("Unsupported field type for {field}: cannot convert text to {type_name} {location}")]
    UnsupportedFieldType {
        field: &'static str,
        type_name: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid value for {field}: {value:?} ({message}) {location}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Type mismatch for {field}: expected {expected}, found {found} {location}")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
        location: ErrorLocation,
    },

    #[error("Missing value for required field {field} {location}")]
    MissingValue {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid escape sequence {sequence:?} {location}")]
    InvalidEscape {
        sequence: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
