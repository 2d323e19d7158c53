use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use chrono::Local;
use env_logger::{Builder, Target};
use log::info;

use crate::config::subsystems::LoggingConfig;
use crate::error::{Error, Result};

/// Install the global logger.
///
/// Writes to stderr, or to `<log_dir>/tanqih_<timestamp>.log` when
/// `log_to_file` is set. Fails if a logger is already installed.
pub fn init_logging(config: &LoggingConfig, log_dir: &Path) -> Result<()> {
    let level = config.get_log_level();
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level);

    if config.log_to_file {
        std::fs::create_dir_all(log_dir)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join(format!("tanqih_{}.log", timestamp)))?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder.try_init()
        .map_err(|e| Error::config(format!("Logger already initialized: {}", e)))?;

    info!("Logging initialized at level {:?}", level);
    Ok(())
}
