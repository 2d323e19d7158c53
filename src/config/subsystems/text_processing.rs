// src/config/subsystems/text_processing.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use crate::types::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextProcessingConfig {
    #[serde(default = "default_remove_numbers")]
    pub remove_numbers: bool,

    #[serde(default = "default_remove_diacritics")]
    pub remove_diacritics: bool,

    #[serde(default = "default_remove_tatweel")]
    pub remove_tatweel: bool,

    #[serde(default = "default_normalize_arabic")]
    pub normalize_arabic: bool,

    #[serde(default = "default_preserve_punctuation")]
    pub preserve_punctuation: bool,

    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_remove_stop_words")]
    pub remove_stop_words: bool,
}

// Default functions
fn default_remove_numbers() -> bool { true }
fn default_remove_diacritics() -> bool { true }
fn default_remove_tatweel() -> bool { true }
fn default_normalize_arabic() -> bool { true }
fn default_preserve_punctuation() -> bool { false }
fn default_lowercase() -> bool { true }
fn default_remove_stop_words() -> bool { true }

impl Default for TextProcessingConfig {
    fn default() -> Self {
        Self {
            remove_numbers: default_remove_numbers(),
            remove_diacritics: default_remove_diacritics(),
            remove_tatweel: default_remove_tatweel(),
            normalize_arabic: default_normalize_arabic(),
            preserve_punctuation: default_preserve_punctuation(),
            lowercase: default_lowercase(),
            language: Language::default(),
            remove_stop_words: default_remove_stop_words(),
        }
    }
}

fn parse_flag(key: &str, value: &str, target: &mut bool) -> Result<()> {
    match value.parse() {
        Ok(flag) => {
            *target = flag;
            Ok(())
        },
        Err(_) => Err(Error::Config(
            format!("Invalid {} value (must be true/false): {}", key, value)
        )),
    }
}

impl FromIni for TextProcessingConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "text_processing" {
            return None;
        }

        match key {
            "remove_numbers" => Some(parse_flag(key, value, &mut self.remove_numbers)),
            "remove_diacritics" => Some(parse_flag(key, value, &mut self.remove_diacritics)),
            "remove_tatweel" => Some(parse_flag(key, value, &mut self.remove_tatweel)),
            "normalize_arabic" => Some(parse_flag(key, value, &mut self.normalize_arabic)),
            "preserve_punctuation" => Some(parse_flag(key, value, &mut self.preserve_punctuation)),
            "lowercase" => Some(parse_flag(key, value, &mut self.lowercase)),
            "remove_stop_words" => Some(parse_flag(key, value, &mut self.remove_stop_words)),
            "language" => match Language::from_str(value.trim_matches('"')) {
                Some(language) => {
                    self.language = language;
                    Some(Ok(()))
                },
                None => Some(Err(Error::Config(
                    format!("Invalid language (must be arabic/english): {}", value)
                ))),
            },
            _ => None,
        }
    }
}

impl TextProcessingConfig {
    pub fn validate(&self) -> Result<()> {
        // Currently no validation needed for boolean flags
        Ok(())
    }

    /// Returns a description of which processing options are enabled
    pub fn describe(&self) -> String {
        let mut enabled = Vec::new();

        if self.remove_diacritics { enabled.push("removing diacritics"); }
        if self.remove_tatweel { enabled.push("removing tatweel"); }
        if self.normalize_arabic { enabled.push("normalizing Arabic"); }
        if self.lowercase { enabled.push("lowercasing"); }
        if !self.preserve_punctuation { enabled.push("removing punctuation"); }
        if self.remove_numbers { enabled.push("removing numbers"); }
        if self.remove_stop_words { enabled.push("removing stop words"); }

        if enabled.is_empty() {
            format!("{}: no text processing enabled", self.language.as_str())
        } else {
            format!("{}: {}", self.language.as_str(), enabled.join(", "))
        }
    }
}
