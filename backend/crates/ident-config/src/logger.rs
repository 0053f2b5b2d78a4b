use crate::{ConfigError, ConfigErrorResult, LogLevel, LoggingConfig};

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Install the global fern logger.
///
/// Writes to `log_file` when given (never colored), otherwise to stdout,
/// colored when `colored` is set.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<&Path>,
    colored: bool,
) -> ConfigErrorResult<()> {
    let level_filter = log_level.0;
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        });

    let dispatch = match log_file {
        Some(path) => dispatch.chain(fern::log_file(path).map_err(|e| {
            ConfigError::logging(format!("Failed to open log file {}: {e}", path.display()))
        })?),
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch
        .apply()
        .map_err(|e| ConfigError::logging(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={level_filter}, file={}",
            path.display()
        ),
        None => info!("Logger initialized: level={level_filter}, stdout"),
    }

    Ok(())
}

/// Initialize logging from the `[logging]` section
pub fn initialize_from(config: &LoggingConfig) -> ConfigErrorResult<()> {
    initialize(
        config.level,
        config.file.as_deref().map(Path::new),
        config.colored,
    )
}
