//! Text rewriting transforms.
//!
//! Every transform is a pure function over its input string. The
//! [`TextTransform`] trait is the seam the preprocessing chain is built on,
//! and the place an external processor (stemmer, diacritizer, tagger) would
//! plug in.

pub mod dialect;
pub mod abbreviation;
pub mod charset;
pub mod arabic;
pub mod noise;

use crate::error::Result;
use crate::types::SubstitutionMap;

pub trait TextTransform: Send + Sync {
    /// Short name used in logs and pipeline descriptions
    fn name(&self) -> &str;

    /// Rewrite `text`. Built-in transforms never fail.
    fn process(&self, text: &str) -> Result<String>;
}

pub use self::dialect::{normalize_dialect, DialectNormalizer};
pub use self::abbreviation::{expand_whole_word, AbbreviationExpander};
pub use self::charset::{clean_to_allowed_charset, CharsetCleaner};
pub use self::arabic::ArabicNormalizer;
pub use self::noise::{remove_noise, NoiseRemover};

/// Single left-to-right scan shared by the single-pass modes.
///
/// At each char boundary the first key in map order that matches there and
/// passes `accept(text, start, end)` is replaced; output is never rescanned.
pub(crate) fn replace_single_pass<F>(text: &str, map: &SubstitutionMap, accept: F) -> String
where
    F: Fn(&str, usize, usize) -> bool,
{
    if map.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    'scan: while pos < text.len() {
        let rest = &text[pos..];
        for (key, value) in map.iter() {
            if rest.starts_with(key) && accept(text, pos, pos + key.len()) {
                out.push_str(value);
                pos += key.len();
                continue 'scan;
            }
        }
        // No key here; copy one char
        let c = rest.chars().next().unwrap_or_default();
        out.push(c);
        pos += c.len_utf8();
    }

    out
}
