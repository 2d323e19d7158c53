pub mod normalizer;
pub mod text_processing;
pub mod logging;

pub use normalizer::NormalizerConfig;
pub use text_processing::TextProcessingConfig;
pub use logging::LoggingConfig;
