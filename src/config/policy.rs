use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CensorkitError, Result};

use super::words::{MatchMethod, WordOptions, Words};

/// What happens to a matched word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMethod {
    /// Mask the match with the censor character.
    #[default]
    Censor,
    /// Replace the match with the word's substitution.
    Substitute,
    /// Delete the match.
    Remove,
}

/// Top-level filter configuration: global policy plus the word dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub filter_method: FilterMethod,

    /// Character used to mask censored words. Default: `*`.
    #[serde(default = "default_censor_character")]
    pub censor_character: char,

    /// Fixed mask length; 0 masks one character per visible character of the match.
    #[serde(default)]
    pub censor_fixed_length: usize,

    #[serde(default = "default_true")]
    pub preserve_first: bool,

    #[serde(default)]
    pub preserve_last: bool,

    /// Make substitutions follow the capitalization of the matched text.
    #[serde(default = "default_true")]
    pub preserve_case: bool,

    /// Wrap substitutions in square brackets.
    #[serde(default)]
    pub substitution_mark: bool,

    /// Used when a word has no substitution of its own. Default: `censored`.
    #[serde(default = "default_substitution")]
    pub default_substitution: String,

    #[serde(default)]
    pub default_word_match_method: MatchMethod,

    #[serde(default)]
    pub default_word_repeat: bool,

    #[serde(default)]
    pub default_word_separators: bool,

    #[serde(default)]
    pub default_word_case_sensitive: bool,

    /// Matched text exempt from filtering (case-sensitive).
    #[serde(default, alias = "wordWhitelist")]
    pub word_allowlist: Vec<String>,

    /// Matched text exempt from filtering (case-insensitive).
    #[serde(default, alias = "iWordWhitelist")]
    pub i_word_allowlist: Vec<String>,

    pub words: Words,
}

fn default_censor_character() -> char {
    '*'
}
fn default_true() -> bool {
    true
}
fn default_substitution() -> String {
    "censored".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_method: FilterMethod::Censor,
            censor_character: '*',
            censor_fixed_length: 0,
            preserve_first: true,
            preserve_last: false,
            preserve_case: true,
            substitution_mark: false,
            default_substitution: "censored".into(),
            default_word_match_method: MatchMethod::Exact,
            default_word_repeat: false,
            default_word_separators: false,
            default_word_case_sensitive: false,
            word_allowlist: Vec::new(),
            i_word_allowlist: Vec::new(),
            words: Words::new(),
        }
    }
}

impl Config {
    /// Parse a YAML (or JSON) document.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).map_err(|e| CensorkitError::Configuration {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&contents).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| CensorkitError::ConfigParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Load from the global config directory: `~/.config/censorkit/config.yml`.
    pub fn load_global() -> Result<Self> {
        Self::load_from(&super::dirs_global().join("config.yml"))
    }

    /// Write the configuration as YAML, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| CensorkitError::Configuration {
            reason: e.to_string(),
        })?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check global policy values that no word can repair.
    pub fn validate(&self) -> Result<()> {
        if self.censor_character.is_control() {
            return Err(CensorkitError::Configuration {
                reason: format!(
                    "censor character {:?} is a control character",
                    self.censor_character
                ),
            });
        }
        if self.default_substitution.contains(super::SUBSTITUTION_DELIMITER) {
            return Err(CensorkitError::Configuration {
                reason: format!(
                    "default substitution may not contain '{}'",
                    super::SUBSTITUTION_DELIMITER
                ),
            });
        }
        Ok(())
    }

    /// Add (or replace) a word, normalizing it the way stored words are kept:
    /// trimmed, and lowercased with its substitution unless case-sensitive.
    /// Raw regex words are stored verbatim. Returns `false` for a blank word.
    pub fn add_word(&mut self, value: &str, mut options: WordOptions) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let case_sensitive = options
            .case_sensitive
            .unwrap_or(self.default_word_case_sensitive);
        let method = options
            .match_method
            .unwrap_or(self.default_word_match_method);
        let value = if case_sensitive || method == MatchMethod::Regex {
            value.to_string()
        } else {
            value.to_lowercase()
        };
        if !case_sensitive {
            options.substitution = options.substitution.trim().to_lowercase();
        }
        self.words.insert(value, options);
        true
    }

    pub fn remove_word(&mut self, value: &str) -> Option<WordOptions> {
        self.words.remove(value)
    }
}
