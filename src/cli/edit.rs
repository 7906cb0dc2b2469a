use std::path::Path;

use crate::config::{Config, WordOptions};
use crate::error::{CensorkitError, Result};
use crate::word::Matcher;

/// Add or replace a word in the config file, creating the file if needed.
///
/// The word is compiled first; a word that would be skipped at filter time
/// is rejected here instead.
pub fn add(path: &Path, word: &str, options: WordOptions) -> Result<()> {
    let mut config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };

    Matcher::new(word.trim(), &options, &config)?;
    if !config.add_word(word, options) {
        return Err(CensorkitError::Configuration {
            reason: "cannot add an empty word".into(),
        });
    }
    config.save_to(path)?;

    eprintln!(
        "censorkit: added '{}' ({} word(s) in {})",
        word.trim(),
        config.words.len(),
        path.display()
    );
    Ok(())
}

/// Remove a word from the config file.
pub fn remove(path: &Path, word: &str) -> Result<()> {
    let mut config = Config::load_from(path)?;
    if config.remove_word(word).is_none() {
        eprintln!("censorkit: '{}' is not in {}", word, path.display());
        std::process::exit(1);
    }
    config.save_to(path)?;
    eprintln!("censorkit: removed '{}'", word);
    Ok(())
}
