// src/config/subsystems/logging.rs

use serde::{Serialize, Deserialize};
use log::LevelFilter;
use crate::error::{Error, Result};
use crate::config::FromIni;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "none"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_to_file: false,
        }
    }
}

impl FromIni for LoggingConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "logging" {
            return None;
        }

        match key {
            "log_level" => {
                let level = value.trim_matches('"').to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    self.log_level = level;
                    Some(Ok(()))
                } else {
                    Some(Err(Error::Config(
                        format!("Invalid log_level (must be one of {:?}): {}", LOG_LEVELS, value)
                    )))
                }
            },
            "log_to_file" => match value.parse() {
                Ok(flag) => {
                    self.log_to_file = flag;
                    Some(Ok(()))
                },
                Err(_) => Some(Err(Error::Config(
                    format!("Invalid log_to_file value (must be true/false): {}", value)
                ))),
            },
            _ => None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::Config(format!("Invalid log_level: {}", self.log_level)));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.log_level.trim().to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "none" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}
