// Stop word / stop phrase filtering

use ahash::AHashSet;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::Result;
use crate::normalizer::ArabicNormalizer;
use crate::types::Language;
use super::TextToken;

const MAX_PHRASE_WORDS: usize = 5;

const ARABIC_STOP_WORDS: &[&str] = &[
    "في", "من", "على", "إلى", "عن", "و", "يا", "لكن", "هذا", "ما",
    "هذه", "ذلك", "تلك", "التي", "الذي", "الذين", "هو", "هي", "هم",
    "أن", "إن", "كان", "كانت", "مع", "كل", "بين", "أو", "ثم", "قد",
    "لا", "لم", "لن", "حتى", "عند", "بعد", "قبل", "منذ", "فيه", "فيها",
    "به", "بها", "له", "لها", "كما", "أي", "إذا", "هل", "نحن", "أنا", "أنت",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her", "hers",
    "herself", "it", "it's", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Set of stop words and multi-word stop phrases.
///
/// Entries are stored in the same normalized form as the text they are
/// matched against, so `إلى` in the list matches `الي` in normalized text.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    phrases: AHashSet<String>,
    longest: usize,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in list for `language`, normalized with `normalizer`.
    pub fn for_language(language: Language, normalizer: &ArabicNormalizer) -> Self {
        let words = match language {
            Language::Arabic => ARABIC_STOP_WORDS,
            Language::English => ENGLISH_STOP_WORDS,
        };
        let mut stop_words = Self::new();
        for word in words {
            stop_words.insert(word, normalizer);
        }
        debug!("Built-in {} stop words: {}", language.as_str(), stop_words.len());
        stop_words
    }

    /// Add one word or phrase. Returns false if it normalizes to nothing or
    /// is longer than the filter can match.
    pub fn insert(&mut self, phrase: &str, normalizer: &ArabicNormalizer) -> bool {
        let normalized = normalizer.normalize(phrase);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            return false;
        }
        if words.len() > MAX_PHRASE_WORDS {
            warn!("Skipping stop phrase longer than {} words: {}", MAX_PHRASE_WORDS, phrase);
            return false;
        }
        self.longest = self.longest.max(words.len());
        self.phrases.insert(words.join(" "))
    }

    /// Load one stop word or phrase per line; `#` lines are comments.
    ///
    /// A missing file is logged and skipped.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, normalizer: &ArabicNormalizer) -> Result<usize> {
        let path_ref = path.as_ref();
        info!("Attempting to load stop words from: {:?}", path_ref);

        let file = match File::open(path_ref) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Could not find stop words file {:?}: {}", path_ref, e);
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let reader = io::BufReader::new(file);
        let mut count = 0;
        for line in reader.lines() {
            let phrase = line?;
            let phrase = phrase.trim();
            if !phrase.is_empty() && !phrase.starts_with('#') && self.insert(phrase, normalizer) {
                count += 1;
            }
        }

        info!("Successfully loaded {} stop words/phrases", count);
        Ok(count)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Drop tokens that form a stop word or phrase, longest phrase first.
    pub fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        if self.phrases.is_empty() {
            return tokens;
        }

        let mut filtered = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let max_len = self.longest.min(tokens.len() - i);
            let phrase_length = (1..=max_len).rev().find(|&len| {
                let phrase = tokens[i..i + len].iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.phrases.contains(&phrase)
            });

            match phrase_length {
                Some(len) => i += len,
                None => {
                    filtered.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use std::io::Write;

    fn words(tokens: &[TextToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn builtin_arabic_list_is_normalized() {
        let normalizer = ArabicNormalizer::default();
        let stop_words = StopWords::for_language(Language::Arabic, &normalizer);
        assert!(stop_words.contains("الي"));
        assert!(stop_words.contains("علي"));
        assert!(!stop_words.contains("إلى"));
    }

    #[test]
    fn filters_english_stop_words() {
        let normalizer = ArabicNormalizer::default();
        let stop_words = StopWords::for_language(Language::English, &normalizer);
        let tokens = tokenize("the rivers flow to the sea");
        assert_eq!(words(&stop_words.filter(tokens)), vec!["rivers", "flow", "sea"]);
    }

    #[test]
    fn multi_word_phrases_take_priority() {
        let normalizer = ArabicNormalizer::default();
        let mut stop_words = StopWords::new();
        stop_words.insert("in spite of", &normalizer);
        stop_words.insert("of", &normalizer);
        let tokens = tokenize("in spite of rain of snow");
        assert_eq!(words(&stop_words.filter(tokens)), vec!["rain", "snow"]);
    }

    #[test]
    fn load_from_file_skips_comments() {
        let normalizer = ArabicNormalizer::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nمثل\n\nعلى الرغم من").unwrap();

        let mut stop_words = StopWords::new();
        let loaded = stop_words.load(file.path(), &normalizer).unwrap();
        assert_eq!(loaded, 2);
        assert!(stop_words.contains("علي الرغم من"));
    }

    #[test]
    fn overlong_phrases_are_not_loaded() {
        let normalizer = ArabicNormalizer::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "one two three four five six\nat the end of").unwrap();

        let mut stop_words = StopWords::new();
        let loaded = stop_words.load(file.path(), &normalizer).unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(stop_words.len(), 1);
        assert!(!stop_words.contains("one two three four five six"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let mut stop_words = StopWords::new();
        let loaded = stop_words
            .load("/nonexistent/stop_words.txt", &ArabicNormalizer::default())
            .unwrap();
        assert_eq!(loaded, 0);
    }
}
