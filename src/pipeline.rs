// src/pipeline.rs

use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::TanqihConfig;
use crate::error::Result;
use crate::normalizer::{
    AbbreviationExpander, ArabicNormalizer, DialectNormalizer, NoiseRemover, TextTransform,
};
use crate::parser::{tokenize, StopWords, TextToken};

/// Ordered chain of transforms, each fed the previous one's output.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn TextTransform>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: TextTransform + 'static>(&mut self, step: T) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn with<T: TextTransform + 'static>(mut self, step: T) -> Self {
        self.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn run(&self, text: &str) -> Result<String> {
        let mut current = text.to_string();
        for step in &self.steps {
            current = step.process(&current)?;
            debug!("After {}: {} bytes", step.name(), current.len());
        }
        Ok(current)
    }
}

impl TextTransform for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn process(&self, text: &str) -> Result<String> {
        self.run(text)
    }
}

/// Full preprocessing chain: substitutions, normalization, noise removal,
/// tokenization and stop-word filtering.
pub struct Preprocessor {
    pipeline: Pipeline,
    stop_words: Option<StopWords>,
}

impl Preprocessor {
    pub fn new(pipeline: Pipeline, stop_words: Option<StopWords>) -> Self {
        Self { pipeline, stop_words }
    }

    pub fn from_config(config: &TanqihConfig) -> Result<Self> {
        let settings = &config.text_processing;
        let mode = config.normalizer.replacement_mode;
        let mut pipeline = Pipeline::new();

        if !config.dialect.is_empty() {
            pipeline.push(DialectNormalizer::new(config.dialect.clone(), mode));
        }
        if !config.abbreviations.is_empty() {
            pipeline.push(AbbreviationExpander::new(config.abbreviations.clone(), mode));
        }
        let normalizer = ArabicNormalizer::new(settings);
        pipeline.push(normalizer.clone());
        pipeline.push(NoiseRemover::new(settings));

        let stop_words = if settings.remove_stop_words {
            let mut stop_words = StopWords::for_language(settings.language, &normalizer);
            if let Some(path) = &config.files.stop_words {
                stop_words.load(path, &normalizer)?;
            }
            Some(stop_words)
        } else {
            None
        };

        info!("Preprocessor steps: {:?}, stop words: {}",
            pipeline.step_names(),
            stop_words.as_ref().map_or(0, StopWords::len));

        Ok(Self::new(pipeline, stop_words))
    }

    pub fn tokens(&self, text: &str) -> Result<Vec<TextToken>> {
        let cleaned = self.pipeline.run(text)?;
        let tokens = tokenize(&cleaned);
        Ok(match &self.stop_words {
            Some(stop_words) => stop_words.filter(tokens),
            None => tokens,
        })
    }

    /// Preprocess `text` and join the surviving tokens with single spaces.
    pub fn process_text(&self, text: &str) -> Result<String> {
        let tokens = self.tokens(text)?;
        Ok(tokens.iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// Preprocess independent lines in parallel, keeping input order.
    pub fn process_batch(&self, lines: &[&str], progress: Option<&ProgressBar>) -> Result<Vec<String>> {
        lines.par_iter()
            .map(|line| {
                let out = self.process_text(line);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                out
            })
            .collect()
    }
}

impl TextTransform for Preprocessor {
    fn name(&self) -> &str {
        "preprocess"
    }

    fn process(&self, text: &str) -> Result<String> {
        self.process_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Language, SubstitutionMap};

    struct Failing;

    impl TextTransform for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn process(&self, _text: &str) -> Result<String> {
            Err(Error::text("collaborator unavailable"))
        }
    }

    #[test]
    fn pipeline_applies_steps_in_order() {
        let pipeline = Pipeline::new()
            .with(DialectNormalizer::new(
                SubstitutionMap::from_pairs([("عايز", "أريد")]).unwrap(),
                Default::default(),
            ))
            .with(ArabicNormalizer::default());
        assert_eq!(pipeline.step_names(), vec!["dialect", "arabic"]);
        assert_eq!(pipeline.run("أنا عايز").unwrap(), "انا اريد");
    }

    #[test]
    fn pipeline_propagates_collaborator_errors() {
        let pipeline = Pipeline::new().with(ArabicNormalizer::default()).with(Failing);
        assert!(matches!(pipeline.run("x"), Err(Error::TextProcessing(_))));
    }

    #[test]
    fn english_sentence_matches_reference_output() {
        let mut config = TanqihConfig::default();
        config.text_processing.language = Language::English;
        let preprocessor = Preprocessor::from_config(&config).unwrap();
        let out = preprocessor.process_text(
            "In the winter season, heavy rains pour down on the mountains, and rivers flow rapidly."
        ).unwrap();
        assert_eq!(out, "winter season heavy rains pour mountains rivers flow rapidly");
    }

    #[test]
    fn arabic_sentence_matches_reference_output() {
        let preprocessor = Preprocessor::from_config(&TanqihConfig::default()).unwrap();
        let out = preprocessor.process_text("فِي فَصْلِ الشِّتَاءِ، تَتَسَاقَطُ الْأَمْطَارُ").unwrap();
        assert_eq!(out, "فصل الشتا تتساقط الامطار");
    }

    #[test]
    fn superscript_alef_does_not_hide_stop_words() {
        let preprocessor = Preprocessor::from_config(&TanqihConfig::default()).unwrap();
        assert_eq!(preprocessor.process_text("هٰذا البيت").unwrap(), "البيت");
        assert_eq!(preprocessor.process_text("في\u{200C} البيت").unwrap(), "البيت");
    }

    #[test]
    fn stop_words_can_be_disabled() {
        let mut config = TanqihConfig::default();
        config.text_processing.remove_stop_words = false;
        let preprocessor = Preprocessor::from_config(&config).unwrap();
        assert_eq!(preprocessor.process_text("في البيت").unwrap(), "في البيت");
    }

    #[test]
    fn batch_keeps_order() {
        let preprocessor = Preprocessor::from_config(&TanqihConfig::default()).unwrap();
        let lines = ["في البيت", "", "من المدرسة!", "٣ كتب"];
        let out = preprocessor.process_batch(&lines, None).unwrap();
        assert_eq!(out, vec!["البيت", "", "المدرسه", "كتب"]);
    }
}
