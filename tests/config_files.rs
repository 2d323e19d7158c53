use std::io::Write;
use tanqih::{Error, Language, Preprocessor, ReplacementMode, TanqihConfig};
use tempfile::{NamedTempFile, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn map_files_come_before_inline_entries() {
    let dir = TempDir::new().unwrap();
    let dialect = write_file(&dir, "dialect.txt", "# egyptian\nعايز=أريد\nفين=أين\n");
    let ini = write_file(&dir, "tanqih.ini", &format!(
        "[files]\ndialect_map = \"{}\"\n\n[dialect]\nفين = أين بالضبط\nازاي = كيف\n",
        dialect.display()
    ));

    let config = TanqihConfig::from_ini(&ini).unwrap();
    let entries: Vec<_> = config.dialect.iter().collect();
    assert_eq!(entries, vec![
        ("عايز", "أريد"),
        ("فين", "أين بالضبط"),
        ("ازاي", "كيف"),
    ]);
}

#[test]
fn missing_map_file_is_a_config_error() {
    let mut ini = NamedTempFile::new().unwrap();
    writeln!(ini, "[files]\nabbreviation_map = /nonexistent/abbrev.txt").unwrap();
    let err = TanqihConfig::from_ini(ini.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn malformed_map_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let abbrev = write_file(&dir, "abbrev.txt", "ASAP=as soon as possible\nnonsense\n");
    let ini = write_file(&dir, "tanqih.ini", &format!(
        "[files]\nabbreviation_map = {}\n", abbrev.display()
    ));
    let err = TanqihConfig::from_ini(&ini).unwrap_err();
    assert!(err.to_string().contains("Line 2"));
}

#[test]
fn configured_preprocessor_uses_maps_and_stop_words() {
    let dir = TempDir::new().unwrap();
    let stop_words = write_file(&dir, "stop.txt", "gym\n");
    let ini = write_file(&dir, "tanqih.ini", &format!(
        "[files]\nstop_words = {}\n\
         [normalizer]\nreplacement_mode = single_pass\n\
         [text_processing]\nlanguage = english\n\
         [abbreviations]\nASAP = as soon as possible\nI'm = I am\n",
        stop_words.display()
    ));

    let config = TanqihConfig::from_ini(&ini).unwrap();
    assert_eq!(config.normalizer.replacement_mode, ReplacementMode::SinglePass);
    assert_eq!(config.text_processing.language, Language::English);

    let preprocessor = Preprocessor::from_config(&config).unwrap();
    let out = preprocessor.process_text("I'm going to the gym ASAP!").unwrap();
    assert_eq!(out, "going soon possible");
}

#[test]
fn config_round_trips_through_json() {
    let config = TanqihConfig::from_ini_str(
        "[dialect]\nعايز = أريد\n[normalizer]\nallow_space = false\n"
    ).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: TanqihConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dialect, config.dialect);
    assert!(!back.normalizer.allow_space);
}
