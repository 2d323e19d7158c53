use ahash::AHashMap;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs;
use std::path::Path;
use log::{debug, info};

use crate::error::{Error, Result};

/// Ordered phrase -> replacement mapping.
///
/// Keys are never empty. Entry order is the replacement precedence: the
/// first-listed key is applied first. Once built the map is not mutated;
/// the `with*` methods consume it and hand back a new value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct SubstitutionMap {
    entries: Vec<(String, String)>,
    // key -> position in `entries`
    index: AHashMap<String, usize>,
}

impl PartialEq for SubstitutionMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for SubstitutionMap {}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from pairs in iteration order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().try_fold(Self::new(), |map, (k, v)| map.with(k, v))
    }

    /// Returns a map with `key` mapped to `value`.
    ///
    /// A repeated key keeps its original position and takes the new value.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::invalid("substitution key must not be empty"));
        }
        let value = value.into();
        self.upsert(key, value);
        Ok(self)
    }

    fn upsert(&mut self, key: String, value: String) {
        match self.index.get(&key) {
            Some(&pos) => {
                debug!("Replacing value for existing key '{}'", key);
                self.entries[pos].1 = value;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Appends every entry of `other`, keeping `self`'s positions for shared keys.
    pub fn with_all(self, other: &SubstitutionMap) -> Self {
        other.entries.iter().fold(self, |mut map, (k, v)| {
            map.upsert(k.clone(), v.clone());
            map
        })
    }

    /// Parses `key=value` lines. Blank lines and `#` comments are skipped.
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut map = Self::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                Error::config(format!(
                    "Line {}: expected 'phrase=replacement', got '{}'", line_num + 1, line
                ))
            })?;
            map = map.with(key.trim(), value.trim()).map_err(|e| {
                Error::config(format!("Line {}: {}", line_num + 1, e))
            })?;
        }
        Ok(map)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let map = Self::parse_str(&content)?;
        info!("Loaded {} substitutions from {:?}", map.len(), path);
        Ok(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(String, String)>> for SubstitutionMap {
    type Error = Error;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<SubstitutionMap> for Vec<(String, String)> {
    fn from(map: SubstitutionMap) -> Self {
        map.entries
    }
}

/// Inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharRange {
    start: char,
    end: char,
}

impl CharRange {
    pub const LATIN_LOWER: CharRange = CharRange { start: 'a', end: 'z' };
    pub const LATIN_UPPER: CharRange = CharRange { start: 'A', end: 'Z' };
    pub const DIGITS: CharRange = CharRange { start: '0', end: '9' };
    // Hamza (U+0621) through yeh (U+064A); harakat start right after.
    pub const ARABIC_LETTERS: CharRange = CharRange { start: '\u{0621}', end: '\u{064A}' };

    pub fn new(start: char, end: char) -> Result<Self> {
        if start > end {
            return Err(Error::invalid(format!(
                "character range start {:?} is after end {:?}", start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single(c: char) -> Self {
        Self { start: c, end: c }
    }

    /// Latin letters, ASCII digits and the Arabic letter block.
    pub fn default_allowed() -> Vec<CharRange> {
        vec![
            Self::LATIN_LOWER,
            Self::LATIN_UPPER,
            Self::DIGITS,
            Self::ARABIC_LETTERS,
        ]
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    /// Parses one range: `a-z`, `U+0621-U+064A`, or a single character.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::invalid("empty character range"));
        }
        if token.chars().count() == 1 {
            return Ok(Self::single(token.chars().next().unwrap_or_default()));
        }
        if let Ok(c) = parse_bound(token) {
            return Ok(Self::single(c));
        }

        // Skip the first char so a leading '-' can be a bound
        let first_len = token.chars().next().map_or(0, char::len_utf8);
        let dash = token[first_len..].find('-')
            .map(|i| i + first_len)
            .ok_or_else(|| Error::invalid(format!("malformed character range '{}'", token)))?;

        let start = parse_bound(&token[..dash])?;
        let end = parse_bound(&token[dash + 1..])?;
        Self::new(start, end)
    }

    /// Parses a comma separated list of ranges.
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Self::parse)
            .collect()
    }
}

fn parse_bound(s: &str) -> Result<char> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        let code = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::invalid(format!("invalid code point '{}'", s)))?;
        return char::from_u32(code)
            .ok_or_else(|| Error::invalid(format!("not a Unicode scalar value: '{}'", s)));
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::invalid(format!("range bound must be one character or U+XXXX, got '{}'", s))),
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |c: char| {
            if c.is_ascii_alphanumeric() {
                c.to_string()
            } else {
                format!("U+{:04X}", c as u32)
            }
        };
        if self.start == self.end {
            write!(f, "{}", show(self.start))
        } else {
            write!(f, "{}-{}", show(self.start), show(self.end))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Arabic,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::English => "english",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arabic" | "ar" => Some(Self::Arabic),
            "english" | "en" => Some(Self::English),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Arabic
    }
}

/// How a substitution map is applied to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplacementMode {
    /// One global pass per key, in map order. Later keys see the output of
    /// earlier ones.
    Sequential,
    /// One left-to-right scan; at each position the first key in map order
    /// that matches wins and replaced text is never rescanned.
    SinglePass,
}

impl ReplacementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplacementMode::Sequential => "sequential",
            ReplacementMode::SinglePass => "single_pass",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "single_pass" | "single-pass" | "simultaneous" => Some(Self::SinglePass),
            _ => None,
        }
    }
}

impl Default for ReplacementMode {
    fn default() -> Self {
        Self::Sequential
    }
}
