use ident_config::ConfigError;
use ident_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to decode record file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Record {id} already exists at {path} {location}")]
    AlreadyExists {
        id: Uuid,
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Record file {path} is not valid UTF-8 {location}")]
    Utf8 {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Invalid store configuration: {source} {location}")]
    Config {
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Data directory unavailable: {message} {location}")]
    DataDir {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(path: impl Into<PathBuf>, source: CoreError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_exists(id: Uuid, path: impl Into<PathBuf>) -> Self {
        Self::AlreadyExists {
            id,
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn utf8(path: impl Into<PathBuf>) -> Self {
        Self::Utf8 {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn data_dir<S: Into<String>>(message: S) -> Self {
        Self::DataDir {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
