//! Config loading, saving and word editing against real files.

use censorkit::{CensorkitError, Config, FilterEngine, FilterMethod, MatchMethod, WordOptions};
use tempfile::TempDir;

const YAML: &str = "\
filterMethod: substitute
censorCharacter: '#'
preserveFirst: false
defaultSubstitution: beep
defaultWordMatchMethod: partial
wordWhitelist: [Classic]
words:
  ass:
  darn:
    matchMethod: exact
    sub: dang;;drat
    repeat: true
  Sam:
    case: true
";

#[test]
fn load_yaml_with_legacy_keys() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yml");
    std::fs::write(&path, YAML).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.filter_method, FilterMethod::Substitute);
    assert_eq!(config.censor_character, '#');
    assert!(!config.preserve_first);
    assert!(config.preserve_case);
    assert_eq!(config.default_substitution, "beep");
    assert_eq!(config.default_word_match_method, MatchMethod::Partial);
    assert_eq!(config.word_allowlist, vec!["Classic".to_string()]);

    let values: Vec<&str> = config.words.iter().map(|(v, _)| v).collect();
    assert_eq!(values, vec!["ass", "darn", "Sam"]);
    let darn = config.words.get("darn").unwrap();
    assert_eq!(darn.match_repeated, Some(true));
    assert_eq!(darn.substitution, "dang;;drat");
    assert_eq!(config.words.get("Sam").unwrap().case_sensitive, Some(true));
}

#[test]
fn load_json_by_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"filterMethod":"remove","words":{"example":{"matchMethod":"whole"}}}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.filter_method, FilterMethod::Remove);
    assert_eq!(
        config.words.get("example").unwrap().match_method,
        Some(MatchMethod::Whole)
    );
}

#[test]
fn load_reports_path_on_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yml");
    std::fs::write(&path, "filterMethod: [unclosed\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, CensorkitError::ConfigParse { .. }));
    assert!(err.to_string().contains("broken.yml"));
}

#[test]
fn load_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = Config::load_from(&tmp.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, CensorkitError::Io(_)));
}

#[test]
fn save_then_load_keeps_words_in_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sub").join("config.yml");

    let mut config = Config::default();
    config.add_word("zebra", WordOptions::new(MatchMethod::Whole));
    config.add_word("Apple", WordOptions::default().substitution("Pear").lists([1, 2]));
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    let values: Vec<&str> = loaded.words.iter().map(|(v, _)| v).collect();
    assert_eq!(values, vec!["zebra", "apple"]);
    assert_eq!(loaded.words.get("apple").unwrap().substitution, "pear");
}

#[test]
fn invalid_default_substitution_blocks_init() {
    let config = Config {
        default_substitution: "a;;b".into(),
        ..Config::default()
    };
    let mut engine = FilterEngine::with_config(config);
    let err = engine.init(0).unwrap_err();
    assert!(matches!(err, CensorkitError::Configuration { .. }));
}

#[test]
fn loaded_config_filters() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yml");
    std::fs::write(&path, YAML).unwrap();

    let mut engine = FilterEngine::from_config(Config::load_from(&path).unwrap()).unwrap();

    // "ass" defaults to partial; the allowlisted "Classic" is left alone.
    assert_eq!(engine.replace_text("Classic sass"), "Classic sbeep");
    // Case-sensitive words keep their substitution's case as written.
    assert_eq!(engine.replace_text("Sam and sam"), "beep and sam");

    let out = engine.replace_text("Daaarn");
    assert!(out == "Dang" || out == "Drat", "unexpected {out}");
}
