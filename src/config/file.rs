// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::{Error, Result};
use super::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub dialect_map: Option<PathBuf>,
    pub abbreviation_map: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dialect_map: None,
            abbreviation_map: None,
            stop_words: None,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        let path = PathBuf::from(value.trim_matches('"'));
        match key {
            "dialect_map" => {
                self.dialect_map = Some(path);
                Some(Ok(()))
            },
            "abbreviation_map" => {
                self.abbreviation_map = Some(path);
                Some(Ok(()))
            },
            "stop_words" => {
                self.stop_words = Some(path);
                Some(Ok(()))
            },
            "log_dir" => {
                self.log_dir = path;
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("Dialect map", &self.dialect_map),
            ("Abbreviation map", &self.abbreviation_map),
        ] {
            if let Some(path) = path {
                if !path.exists() {
                    return Err(Error::Config(
                        format!("{} file does not exist: {:?}", name, path)
                    ));
                }
            }
        }

        // Only warn for stop words, the built-in list still applies
        if let Some(path) = &self.stop_words {
            if !path.exists() {
                log::warn!("Stop words file not found: {:?}", path);
            }
        }

        Ok(())
    }
}
