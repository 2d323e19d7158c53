// src/normalizer/noise.rs

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::subsystems::TextProcessingConfig;
use crate::error::Result;
use super::TextTransform;

lazy_static! {
    // Regex `\w` also admits combining marks and ZWNJ/ZWJ; those count as noise here
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]|[\p{M}\x{200C}\x{200D}]").unwrap();
    static ref NUMBERS: Regex = Regex::new(r"\d+").unwrap();
}

/// Drop everything that is neither a word character nor whitespace, then
/// optionally drop digit runs (ASCII and Arabic-Indic alike).
pub fn remove_noise(text: &str, remove_numbers: bool) -> String {
    let text = PUNCTUATION.replace_all(text, "");
    if remove_numbers {
        NUMBERS.replace_all(&text, "").into_owned()
    } else {
        text.into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct NoiseRemover {
    remove_numbers: bool,
    preserve_punctuation: bool,
}

impl NoiseRemover {
    pub fn new(settings: &TextProcessingConfig) -> Self {
        Self {
            remove_numbers: settings.remove_numbers,
            preserve_punctuation: settings.preserve_punctuation,
        }
    }

    pub fn clean(&self, text: &str) -> String {
        if self.preserve_punctuation {
            if self.remove_numbers {
                return NUMBERS.replace_all(text, "").into_owned();
            }
            return text.to_string();
        }
        remove_noise(text, self.remove_numbers)
    }
}

impl TextTransform for NoiseRemover {
    fn name(&self) -> &str {
        "noise"
    }

    fn process(&self, text: &str) -> Result<String> {
        Ok(self.clean(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_punctuation_and_digits() {
        assert_eq!(remove_noise("Hello, world! 2024", true), "Hello world ");
        assert_eq!(remove_noise("في الشتاء، ١٢ مطر.", true), "في الشتاء  مطر");
    }

    #[test]
    fn removes_combining_marks_and_join_controls() {
        assert_eq!(remove_noise("هٰذا", true), "هذا");
        assert_eq!(remove_noise("a\u{200C}b", true), "ab");
        assert_eq!(remove_noise("x\u{200D}y\u{06E2}z", false), "xyz");
    }

    #[test]
    fn keeps_digits_when_asked() {
        assert_eq!(remove_noise("room 101!", false), "room 101");
    }

    #[test]
    fn preserve_punctuation_only_strips_numbers() {
        let settings = TextProcessingConfig {
            preserve_punctuation: true,
            ..TextProcessingConfig::default()
        };
        assert_eq!(NoiseRemover::new(&settings).clean("a1, b2."), "a, b.");
    }
}
