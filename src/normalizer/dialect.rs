// src/normalizer/dialect.rs

use log::{debug, trace};

use crate::error::Result;
use crate::types::{ReplacementMode, SubstitutionMap};
use super::{replace_single_pass, TextTransform};

/// Replace every mapped dialect phrase with its standard form.
///
/// Keys are applied one at a time in map order, each as a global plain
/// substring replacement over the text produced so far. There is no
/// word-boundary check, so a phrase inside a longer word is replaced too,
/// and a later key may match text an earlier key produced.
pub fn normalize_dialect(text: &str, map: &SubstitutionMap) -> String {
    map.iter().fold(text.to_string(), |current, (from, to)| {
        let hits = current.matches(from).count();
        if hits == 0 {
            return current;
        }
        trace!("Dialect '{}' -> '{}' ({} occurrences)", from, to, hits);
        current.replace(from, to)
    })
}

/// Single scan variant: earlier keys win at a given position and replaced
/// text is not matched again.
pub fn normalize_dialect_single_pass(text: &str, map: &SubstitutionMap) -> String {
    replace_single_pass(text, map, |_, _, _| true)
}

#[derive(Debug, Clone)]
pub struct DialectNormalizer {
    map: SubstitutionMap,
    mode: ReplacementMode,
}

impl DialectNormalizer {
    pub fn new(map: SubstitutionMap, mode: ReplacementMode) -> Self {
        debug!("Dialect normalizer with {} entries ({})", map.len(), mode.as_str());
        Self { map, mode }
    }

    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }

    pub fn normalize(&self, text: &str) -> String {
        match self.mode {
            ReplacementMode::Sequential => normalize_dialect(text, &self.map),
            ReplacementMode::SinglePass => normalize_dialect_single_pass(text, &self.map),
        }
    }
}

impl TextTransform for DialectNormalizer {
    fn name(&self) -> &str {
        "dialect"
    }

    fn process(&self, text: &str) -> Result<String> {
        Ok(self.normalize(text))
    }
}
