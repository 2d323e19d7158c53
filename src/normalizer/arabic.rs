// Arabic orthographic normalization: strips harakat and tatweel and folds
// hamza/alef/yeh/teh-marbuta variants into a single spelling.

use log::trace;

use crate::config::subsystems::TextProcessingConfig;
use crate::error::Result;
use super::TextTransform;

const TATWEEL: char = '\u{0640}';

#[inline]
fn is_diacritic(c: char) -> bool {
    // Fathatan through wavy hamza below, plus superscript alef
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

#[derive(Debug, Clone)]
pub struct ArabicNormalizer {
    remove_diacritics: bool,
    remove_tatweel: bool,
    normalize_arabic: bool,
    lowercase: bool,
}

impl ArabicNormalizer {
    pub fn new(settings: &TextProcessingConfig) -> Self {
        Self {
            remove_diacritics: settings.remove_diacritics,
            remove_tatweel: settings.remove_tatweel,
            normalize_arabic: settings.normalize_arabic,
            lowercase: settings.lowercase,
        }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(&TextProcessingConfig::default())
    }

    /// Fold a letter to its normalized form; `None` drops it.
    fn normalize_char(&self, c: char) -> Option<char> {
        if self.remove_diacritics && is_diacritic(c) {
            return None;
        }
        if self.remove_tatweel && c == TATWEEL {
            return None;
        }
        if !self.normalize_arabic {
            return Some(c);
        }

        match c {
            'أ' | 'آ' | 'إ' => Some('ا'),
            'ؤ' => Some('و'),
            'ى' => Some('ي'),
            'ة' => Some('ه'),
            'ء' => None,
            _ => Some(c),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(n) = self.normalize_char(c) {
                if self.lowercase {
                    out.extend(n.to_lowercase());
                } else {
                    out.push(n);
                }
            }
        }
        trace!("Normalized {} bytes -> {} bytes", text.len(), out.len());
        out
    }
}

impl Default for ArabicNormalizer {
    fn default() -> Self {
        Self::new_with_defaults()
    }
}

impl TextTransform for ArabicNormalizer {
    fn name(&self) -> &str {
        "arabic"
    }

    fn process(&self, text: &str) -> Result<String> {
        Ok(self.normalize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_folds_letters() {
        let normalizer = ArabicNormalizer::default();
        assert_eq!(normalizer.normalize("فِي فَصْلِ الشِّتَاءِ"), "في فصل الشتا");
        assert_eq!(normalizer.normalize("الْأَمْطَارُ"), "الامطار");
        assert_eq!(normalizer.normalize("إلى مدرسة مؤمن"), "الي مدرسه مومن");
    }

    #[test]
    fn strips_superscript_alef() {
        assert_eq!(ArabicNormalizer::default().normalize("هٰذا"), "هذا");
    }

    #[test]
    fn removes_tatweel_and_lowercases() {
        let normalizer = ArabicNormalizer::default();
        assert_eq!(normalizer.normalize("جمـــيل In The Winter"), "جميل in the winter");
    }

    #[test]
    fn flags_can_disable_steps() {
        let settings = TextProcessingConfig {
            normalize_arabic: false,
            lowercase: false,
            ..TextProcessingConfig::default()
        };
        let normalizer = ArabicNormalizer::new(&settings);
        assert_eq!(normalizer.normalize("أَحمد ABC"), "أحمد ABC");
    }
}
