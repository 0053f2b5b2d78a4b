use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_DATA_DIRECTORY, LoggingConfig, StoreConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

/// Top-level settings: `[store]` and `[logging]` tables of `config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Resolve the config directory, then [`Config::load_from`] it.
    ///
    /// `IDENT_CONFIG_DIR` wins over `./.ident/`. The result is not validated.
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Read `config.toml` from `dir` (defaults when absent), then apply
    /// `IDENT_*` environment overrides. `dir` is created if missing.
    pub fn load_from(dir: &Path) -> ConfigErrorResult<Self> {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let file = dir.join(CONFIG_FILE_NAME);
        let mut config = match std::fs::read_to_string(&file) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: file.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(source) => return Err(ConfigError::Io { path: file, source }),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = env_value(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(CONFIG_DIR_NAME))
            .map_err(|e| ConfigError::config(format!("cannot determine working directory: {e}")))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.store.validate()?;

        match self.logging.file.as_deref() {
            Some(file) if file.trim().is_empty() => Err(ConfigError::logging(
                "logging.file cannot be blank when set",
            )),
            _ => Ok(()),
        }
    }

    pub fn log_summary(&self) {
        let data_dir = self
            .store
            .data_dir
            .clone()
            .unwrap_or_else(|| format!("<exe dir>/{DEFAULT_DATA_DIRECTORY}"));

        info!(
            "Store: dir={data_dir}, ext=.{}, format={}, overwrite_on_create={}",
            self.store.extension, self.store.format, self.store.overwrite_on_create
        );
        info!(
            "Logging: level={}, colored={}, file={}",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        let store = &mut self.store;
        if let Some(dir) = env_value("IDENT_DATA_DIR") {
            store.data_dir = Some(dir);
        }
        if let Some(extension) = env_value("IDENT_STORE_EXTENSION") {
            store.extension = extension;
        }
        override_parsed("IDENT_STORE_FORMAT", &mut store.format);
        override_flag("IDENT_OVERWRITE_ON_CREATE", &mut store.overwrite_on_create);

        let logging = &mut self.logging;
        override_parsed("IDENT_LOG_LEVEL", &mut logging.level);
        override_flag("IDENT_LOG_COLORED", &mut logging.colored);
        if let Some(file) = env_value("IDENT_LOG_FILE") {
            logging.file = Some(file);
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Unparseable values leave `target` untouched.
fn override_parsed<T: FromStr>(name: &str, target: &mut T) {
    if let Some(parsed) = env_value(name).and_then(|raw| raw.parse().ok()) {
        *target = parsed;
    }
}

/// `true` or `1` enable; any other value disables.
fn override_flag(name: &str, target: &mut bool) {
    if let Some(raw) = env_value(name) {
        *target = matches!(raw.trim(), "true" | "1");
    }
}
