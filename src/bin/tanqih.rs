use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, debug};
use tanqih::{
    Result,
    TanqihConfig,
    Preprocessor,
    SubstitutionMap,
    CharRange,
    Language,
    ReplacementMode,
    normalizer::{
        AbbreviationExpander,
        CharsetCleaner,
        DialectNormalizer,
    },
    utils::{init_logging, string::split_lines},
};

const DEFAULT_CONFIG: &str = "tanqih.ini";

#[derive(Parser)]
#[command(name = "tanqih", version, about = "Arabic/English text normalization")]
struct Cli {
    /// INI configuration file (defaults to ./tanqih.ini when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level (error, warn, info, debug, trace, none)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct InputArgs {
    /// Text to process; stdin is read when neither --text nor --input is given
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Replace dialect words with their standard forms
    Dialect {
        #[command(flatten)]
        input: InputArgs,
        /// Extra `phrase=replacement` map file, appended after the configured map
        #[arg(short, long)]
        map: Option<PathBuf>,
        /// Replace all keys in one scan instead of one pass per key
        #[arg(long)]
        single_pass: bool,
    },
    /// Expand whole-word abbreviations
    Expand {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short, long)]
        map: Option<PathBuf>,
        #[arg(long)]
        single_pass: bool,
    },
    /// Drop every character outside the allowed set
    Clean {
        #[command(flatten)]
        input: InputArgs,
        /// Comma separated ranges, e.g. "a-z,A-Z,0-9,U+0621-U+064A"
        #[arg(short, long)]
        ranges: Option<String>,
        /// Drop spaces as well
        #[arg(long)]
        no_space: bool,
    },
    /// Run the full preprocessing chain
    Preprocess {
        #[command(flatten)]
        input: InputArgs,
        /// arabic or english
        #[arg(short, long)]
        language: Option<String>,
        /// Print tokens with byte spans as JSON
        #[arg(long, conflicts_with = "lines")]
        json: bool,
        /// Treat every input line as a separate document
        #[arg(long)]
        lines: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn load_config(path: Option<&Path>) -> Result<TanqihConfig> {
    match path {
        Some(path) => TanqihConfig::from_ini(path),
        None if Path::new(DEFAULT_CONFIG).exists() => TanqihConfig::from_ini(DEFAULT_CONFIG),
        None => Ok(TanqihConfig::default()),
    }
}

fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        debug!("Reading input from {:?}", path);
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn merge_map(base: &SubstitutionMap, extra: Option<&PathBuf>) -> Result<SubstitutionMap> {
    match extra {
        Some(path) => Ok(base.clone().with_all(&SubstitutionMap::load(path)?)),
        None => Ok(base.clone()),
    }
}

fn mode_for(single_pass: bool, configured: ReplacementMode) -> ReplacementMode {
    if single_pass {
        ReplacementMode::SinglePass
    } else {
        configured
    }
}

fn run(cli: Cli, mut config: TanqihConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Dialect { input, map, single_pass } => {
            let map = merge_map(&config.dialect, map.as_ref())?;
            let normalizer = DialectNormalizer::new(
                map,
                mode_for(single_pass, config.normalizer.replacement_mode),
            );
            write!(out, "{}", normalizer.normalize(&read_input(&input)?))?;
        },
        Command::Expand { input, map, single_pass } => {
            let map = merge_map(&config.abbreviations, map.as_ref())?;
            let expander = AbbreviationExpander::new(
                map,
                mode_for(single_pass, config.normalizer.replacement_mode),
            );
            write!(out, "{}", expander.expand(&read_input(&input)?))?;
        },
        Command::Clean { input, ranges, no_space } => {
            if let Some(ranges) = ranges {
                config.normalizer.allowed_ranges = CharRange::parse_list(&ranges)?;
            }
            if no_space {
                config.normalizer.allow_space = false;
            }
            let cleaner = CharsetCleaner::from_config(&config.normalizer);
            write!(out, "{}", cleaner.clean(&read_input(&input)?))?;
        },
        Command::Preprocess { input, language, json, lines } => {
            if let Some(language) = language {
                config.text_processing.language = Language::from_str(&language)
                    .ok_or_else(|| tanqih::Error::invalid(format!("Unknown language: {}", language)))?;
            }
            info!("Preprocessing with {}", config.text_processing.describe());
            let preprocessor = Preprocessor::from_config(&config)?;
            let text = read_input(&input)?;

            if lines {
                let docs: Vec<&str> = split_lines(&text).collect();
                let progress = ProgressBar::new(docs.len() as u64);
                progress.set_style(ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] {bar:40} {pos}/{len} lines")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()));
                let results = preprocessor.process_batch(&docs, Some(&progress))?;
                progress.finish_and_clear();
                for line in results {
                    writeln!(out, "{}", line)?;
                }
            } else if json {
                let tokens = preprocessor.tokens(&text)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&tokens)?)?;
            } else {
                writeln!(out, "{}", preprocessor.process_text(&text)?)?;
            }
        },
        Command::Config => {
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        },
    }

    out.flush()?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(e.into());
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.log_level = level.to_lowercase();
        config.logging.validate()?;
    }

    init_logging(&config.logging, &config.files.log_dir)?;
    info!("Configuration: {}", config.describe());

    run(cli, config)?;
    Ok(())
}
