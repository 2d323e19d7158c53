// src/normalizer/charset.rs

use log::trace;

use crate::config::subsystems::NormalizerConfig;
use crate::error::Result;
use crate::types::CharRange;
use super::TextTransform;

/// Keep only characters inside `ranges`, plus U+0020 when `allow_space` is set.
///
/// Everything else (punctuation, emoji, harakat, line breaks) is deleted.
/// Surviving characters keep their order.
pub fn clean_to_allowed_charset(text: &str, ranges: &[CharRange], allow_space: bool) -> String {
    text.chars()
        .filter(|&c| is_allowed(c, ranges, allow_space))
        .collect()
}

#[inline]
fn is_allowed(c: char, ranges: &[CharRange], allow_space: bool) -> bool {
    (allow_space && c == ' ') || ranges.iter().any(|r| r.contains(c))
}

#[derive(Debug, Clone)]
pub struct CharsetCleaner {
    ranges: Vec<CharRange>,
    allow_space: bool,
}

impl CharsetCleaner {
    pub fn new(ranges: Vec<CharRange>, allow_space: bool) -> Self {
        Self { ranges, allow_space }
    }

    pub fn from_config(settings: &NormalizerConfig) -> Self {
        Self::new(settings.allowed_ranges.clone(), settings.allow_space)
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    pub fn is_allowed(&self, c: char) -> bool {
        is_allowed(c, &self.ranges, self.allow_space)
    }

    /// Number of characters that would survive cleaning
    pub fn count_allowed(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.is_allowed(c)).count()
    }

    pub fn clean(&self, text: &str) -> String {
        let cleaned = clean_to_allowed_charset(text, &self.ranges, self.allow_space);
        trace!("Charset cleaning dropped {} chars",
            text.chars().count() - cleaned.chars().count());
        cleaned
    }
}

impl Default for CharsetCleaner {
    fn default() -> Self {
        Self::new(CharRange::default_allowed(), true)
    }
}

impl TextTransform for CharsetCleaner {
    fn name(&self) -> &str {
        "charset"
    }

    fn process(&self, text: &str) -> Result<String> {
        Ok(self.clean(text))
    }
}
