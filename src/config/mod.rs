pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::{Error, Result};
use crate::types::SubstitutionMap;
use log::{info, warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TanqihConfig {
    // File paths
    pub files: file::FileConfig,

    // Subsystem configs
    pub normalizer: subsystems::NormalizerConfig,
    pub text_processing: subsystems::TextProcessingConfig,
    pub logging: subsystems::LoggingConfig,

    // Substitution maps, in file order
    pub dialect: SubstitutionMap,
    pub abbreviations: SubstitutionMap,
}

impl TanqihConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.normalizer.validate()?;
        self.text_processing.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load, resolve map files and validate.
    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_ini_str(&content)?;
        config.validate()?;
        config.load_map_files()?;
        Ok(config)
    }

    /// Parse INI text without touching the filesystem.
    ///
    /// Unknown keys and malformed values are logged and skipped.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("Line {}: ignoring line without '=': {}", line_num + 1, line);
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            // Delegate to appropriate subsystem config
            let handled = match current_section.as_str() {
                "files" => config.files.from_ini_section(&current_section, key, value),
                "normalizer" => config.normalizer.from_ini_section(&current_section, key, value),
                "text_processing" => config.text_processing.from_ini_section(&current_section, key, value),
                "logging" => config.logging.from_ini_section(&current_section, key, value),
                "dialect" => Some(
                    config.dialect.clone().with(key, value).map(|map| config.dialect = map)
                ),
                "abbreviations" => Some(
                    config.abbreviations.clone().with(key, value).map(|map| config.abbreviations = map)
                ),
                _ => None,
            };

            match handled {
                Some(Err(e)) => warn!("Error processing config key {}={}: {}", key, value, e),
                Some(Ok(())) => {},
                None => warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section),
            }
        }

        Ok(config)
    }

    /// Prepend entries from the configured map files to the inline maps.
    ///
    /// Inline `[dialect]`/`[abbreviations]` entries override file values for
    /// the same key.
    pub fn load_map_files(&mut self) -> Result<()> {
        if let Some(path) = &self.files.dialect_map {
            let from_file = SubstitutionMap::load(path)
                .map_err(|e| Error::config(format!("Dialect map {:?}: {}", path, e)))?;
            self.dialect = from_file.with_all(&self.dialect);
        }
        if let Some(path) = &self.files.abbreviation_map {
            let from_file = SubstitutionMap::load(path)
                .map_err(|e| Error::config(format!("Abbreviation map {:?}: {}", path, e)))?;
            self.abbreviations = from_file.with_all(&self.abbreviations);
        }
        info!("Configured {} dialect and {} abbreviation substitutions",
            self.dialect.len(), self.abbreviations.len());
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "normalizer: {}; text processing: {}; {} dialect / {} abbreviation entries",
            self.normalizer.describe(),
            self.text_processing.describe(),
            self.dialect.len(),
            self.abbreviations.len(),
        )
    }
}
