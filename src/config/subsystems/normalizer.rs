// src/config/subsystems/normalizer.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use crate::types::{CharRange, ReplacementMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    // How substitution maps are applied
    pub replacement_mode: ReplacementMode,

    // Character-set cleaning
    pub allow_space: bool,
    pub allowed_ranges: Vec<CharRange>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            replacement_mode: ReplacementMode::default(),
            allow_space: true,
            allowed_ranges: CharRange::default_allowed(),
        }
    }
}

impl FromIni for NormalizerConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "normalizer" {
            return None;
        }

        match key {
            "replacement_mode" => match ReplacementMode::from_str(value) {
                Some(mode) => {
                    self.replacement_mode = mode;
                    Some(Ok(()))
                },
                None => Some(Err(Error::Config(
                    format!("Invalid replacement_mode (must be sequential/single_pass): {}", value)
                ))),
            },
            "allow_space" => match value.parse() {
                Ok(flag) => {
                    self.allow_space = flag;
                    Some(Ok(()))
                },
                Err(_) => Some(Err(Error::Config(
                    format!("Invalid allow_space value (must be true/false): {}", value)
                ))),
            },
            "allowed_ranges" => {
                match CharRange::parse_list(value.trim_matches('"')) {
                    Ok(ranges) => {
                        self.allowed_ranges = ranges;
                        Some(Ok(()))
                    },
                    Err(e) => Some(Err(Error::Config(
                        format!("Invalid allowed_ranges '{}': {}", value, e)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl NormalizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.allowed_ranges.is_empty() && !self.allow_space {
            return Err(Error::Config(
                "allowed_ranges is empty and allow_space is false; cleaning would delete everything".to_string()
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        let ranges = self.allowed_ranges.iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{} replacement, keeping [{}]{}",
            self.replacement_mode.as_str(),
            ranges,
            if self.allow_space { " and spaces" } else { "" }
        )
    }
}
