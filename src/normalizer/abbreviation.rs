// src/normalizer/abbreviation.rs

use log::{debug, trace};

use crate::error::Result;
use crate::types::{ReplacementMode, SubstitutionMap};
use crate::utils::string::is_whole_word;
use super::{replace_single_pass, TextTransform};

/// Expand every abbreviation that appears as a whole word.
///
/// A candidate only matches when the characters on both sides of it are not
/// word characters (or it touches the start/end of the text). Matching is
/// exact and case-sensitive. Keys are applied one global pass at a time, in
/// map order.
pub fn expand_whole_word(text: &str, map: &SubstitutionMap) -> String {
    map.iter().fold(text.to_string(), |current, (abbrev, expansion)| {
        replace_whole_word(&current, abbrev, expansion)
    })
}

/// Single scan variant of [`expand_whole_word`].
pub fn expand_whole_word_single_pass(text: &str, map: &SubstitutionMap) -> String {
    replace_single_pass(text, map, is_whole_word)
}

fn replace_whole_word(text: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;
    let mut hits = 0usize;

    while let Some(offset) = text[from..].find(key) {
        let start = from + offset;
        let end = start + key.len();

        if is_whole_word(text, start, end) {
            out.push_str(&text[copied..start]);
            out.push_str(value);
            copied = end;
            from = end;
            hits += 1;
        } else {
            // Retry one char further so overlapping candidates are still seen
            from = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&text[copied..]);

    if hits > 0 {
        trace!("Expanded '{}' -> '{}' ({} occurrences)", key, value, hits);
    }
    out
}

#[derive(Debug, Clone)]
pub struct AbbreviationExpander {
    map: SubstitutionMap,
    mode: ReplacementMode,
}

impl AbbreviationExpander {
    pub fn new(map: SubstitutionMap, mode: ReplacementMode) -> Self {
        debug!("Abbreviation expander with {} entries ({})", map.len(), mode.as_str());
        Self { map, mode }
    }

    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }

    pub fn expand(&self, text: &str) -> String {
        match self.mode {
            ReplacementMode::Sequential => expand_whole_word(text, &self.map),
            ReplacementMode::SinglePass => expand_whole_word_single_pass(text, &self.map),
        }
    }
}

impl TextTransform for AbbreviationExpander {
    fn name(&self) -> &str {
        "abbreviations"
    }

    fn process(&self, text: &str) -> Result<String> {
        Ok(self.expand(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> SubstitutionMap {
        SubstitutionMap::from_pairs([
            ("ASAP", "as soon as possible"),
            ("I'm", "I am"),
        ]).unwrap()
    }

    #[test]
    fn expands_whole_words() {
        let out = expand_whole_word("I'm going to the gym ASAP", &english());
        assert_eq!(out, "I am going to the gym as soon as possible");
    }

    #[test]
    fn no_match_inside_longer_word() {
        assert_eq!(expand_whole_word("ASAPX", &english()), "ASAPX");
        assert_eq!(expand_whole_word("XASAP", &english()), "XASAP");
        assert_eq!(expand_whole_word("ASAP_", &english()), "ASAP_");
    }

    #[test]
    fn punctuation_counts_as_boundary() {
        assert_eq!(
            expand_whole_word("(ASAP), please.", &english()),
            "(as soon as possible), please."
        );
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(expand_whole_word("asap", &english()), "asap");
    }

    #[test]
    fn failed_candidate_does_not_hide_overlapping_match() {
        let map = SubstitutionMap::from_pairs([("a a", "X")]).unwrap();
        assert_eq!(expand_whole_word("xa a a", &map), "xa X");
    }

    #[test]
    fn arabic_letters_are_word_characters() {
        let map = SubstitutionMap::from_pairs([("د", "دكتور")]).unwrap();
        assert_eq!(expand_whole_word("د. أحمد", &map), "دكتور. أحمد");
        assert_eq!(expand_whole_word("دار", &map), "دار");
    }

    #[test]
    fn empty_map_is_identity() {
        let text = "nothing to see ASAP";
        assert_eq!(expand_whole_word(text, &SubstitutionMap::new()), text);
    }

    #[test]
    fn single_pass_does_not_expand_expansions() {
        let map = SubstitutionMap::from_pairs([("BRB", "be right back"), ("back", "BACK")]).unwrap();
        assert_eq!(expand_whole_word("BRB", &map), "be right BACK");
        assert_eq!(expand_whole_word_single_pass("BRB", &map), "be right back");
    }
}
