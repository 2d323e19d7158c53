//! tanqih is a small toolkit for normalizing Arabic and English text.
//! It provides dialect-word substitution, whole-word abbreviation expansion,
//! character-set cleaning, and an Arabic-aware preprocessing chain built on
//! top of them.

// Module declarations
pub mod error;
pub mod types;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod utils;
pub mod config;

// Re-exports
pub use error::{Error, Result};
pub use types::{CharRange, Language, ReplacementMode, SubstitutionMap};
pub use normalizer::{
    clean_to_allowed_charset, expand_whole_word, normalize_dialect, TextTransform,
};
pub use pipeline::{Pipeline, Preprocessor};

// Re-export the config from config module
pub use config::TanqihConfig;
