mod config;
mod error;
mod log_level;
mod logging_config;
pub mod logger;
mod store_config;


pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

pub use ident_core::LineFormat;

pub const CONFIG_DIR_ENV: &str = "IDENT_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".ident";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_DATA_DIRECTORY: &str = "DataStore";
pub const DEFAULT_STORE_EXTENSION: &str = "usr";
pub const DEFAULT_OVERWRITE_ON_CREATE: bool = false;
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_COLORED: bool = true;
