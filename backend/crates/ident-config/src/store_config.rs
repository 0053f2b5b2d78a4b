use crate::{ConfigError, ConfigErrorResult, DEFAULT_OVERWRITE_ON_CREATE, DEFAULT_STORE_EXTENSION};

use ident_core::LineFormat;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding record files. Relative paths resolve against the
    /// executable's directory; unset means `<exe dir>/DataStore`.
    pub data_dir: Option<String>,
    /// Record file extension, without the leading dot
    pub extension: String,
    pub format: LineFormat,
    /// Let `create` replace an existing record instead of failing
    pub overwrite_on_create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            extension: String::from(DEFAULT_STORE_EXTENSION),
            format: LineFormat::default(),
            overwrite_on_create: DEFAULT_OVERWRITE_ON_CREATE,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_extension(&self.extension)?;

        if let Some(dir) = &self.data_dir
            && dir.trim().is_empty()
        {
            return Err(ConfigError::store("store.data_dir cannot be blank when set"));
        }

        Ok(())
    }

    /// A record file extension: non-empty ASCII alphanumerics, no leading dot.
    pub fn validate_extension(extension: &str) -> ConfigErrorResult<()> {
        if extension.is_empty() {
            return Err(ConfigError::store("store.extension cannot be empty"));
        }

        if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::store(format!(
                "store.extension must be alphanumeric without a leading dot, got '{extension}'"
            )));
        }

        Ok(())
    }
}
