use regex::Regex;

use crate::config::Config;
use crate::error::CensorkitError;
use crate::word::{Matcher, Word};

/// The wordlist every word belongs to.
pub const DEFAULT_LIST: u32 = 0;

/// Lookup key for [`Wordlist::find`]: a word's value or its position in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKey<'a> {
    Value(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for WordKey<'a> {
    fn from(value: &'a str) -> Self {
        WordKey::Value(value)
    }
}

impl From<usize> for WordKey<'_> {
    fn from(index: usize) -> Self {
        WordKey::Index(index)
    }
}

/// Compiled matchers for one list id, longest word first.
#[derive(Debug)]
pub struct Wordlist {
    id: u32,
    matchers: Vec<Matcher>,
    failures: Vec<CensorkitError>,
}

impl Wordlist {
    /// Compile every word of `config` that belongs to `id`.
    ///
    /// Words that fail to compile are logged and skipped; see [`Wordlist::failures`].
    pub fn build(config: &Config, id: u32) -> Self {
        let mut matchers = Vec::new();
        let mut failures = Vec::new();

        for (value, options) in config.words.iter() {
            let word = Word::resolve(value, options, config);
            if !word.in_list(id) {
                continue;
            }
            match Matcher::from_word(word, config.filter_method) {
                Ok(matcher) => matchers.push(matcher),
                Err(e) => {
                    tracing::warn!("skipping word {:?} in wordlist {}: {}", value, id, e);
                    failures.push(e);
                }
            }
        }

        // Stable sort keeps insertion order among equal lengths.
        matchers.sort_by(|a, b| b.word().len().cmp(&a.word().len()));

        tracing::debug!(
            "built wordlist {} with {} word(s), {} skipped",
            id,
            matchers.len(),
            failures.len()
        );

        Self {
            id,
            matchers,
            failures,
        }
    }

    /// Discard all matchers and compile them again from `config`.
    pub fn rebuild(&mut self, config: &Config) {
        *self = Self::build(config, self.id);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Look up a word by value or by position in match order.
    pub fn find<'a>(&self, key: impl Into<WordKey<'a>>) -> Option<&Word> {
        match key.into() {
            WordKey::Value(value) => self
                .matchers
                .iter()
                .map(Matcher::word)
                .find(|word| word.value == value),
            WordKey::Index(index) => self.matchers.get(index).map(Matcher::word),
        }
    }

    /// Word values in match order.
    pub fn list(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.word().value.as_str()).collect()
    }

    /// Compiled regexes in match order.
    pub fn regexes(&self) -> Vec<&Regex> {
        self.matchers.iter().map(Matcher::regex).collect()
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Pattern errors for words skipped during the last build.
    pub fn failures(&self) -> &[CensorkitError] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchMethod, WordOptions};

    fn config(words: &[(&str, WordOptions)]) -> Config {
        Config {
            words: words.iter().cloned().collect(),
            ..Config::default()
        }
    }

    #[test]
    fn test_longest_first_with_stable_ties() {
        let cfg = config(&[
            ("pass", WordOptions::default()),
            ("bbb", WordOptions::default()),
            ("password", WordOptions::default()),
            ("aaa", WordOptions::default()),
        ]);
        let list = Wordlist::build(&cfg, DEFAULT_LIST);
        assert_eq!(list.list(), vec!["password", "pass", "bbb", "aaa"]);
    }

    #[test]
    fn test_bad_word_is_skipped() {
        let cfg = config(&[
            ("good", WordOptions::default()),
            ("(bad", WordOptions::new(MatchMethod::Regex)),
        ]);
        let list = Wordlist::build(&cfg, DEFAULT_LIST);
        assert_eq!(list.list(), vec!["good"]);
        assert_eq!(list.failures().len(), 1);
        assert_eq!(list.failures()[0].word(), Some("(bad"));
    }

    #[test]
    fn test_find_by_value_and_index() {
        let cfg = config(&[
            ("short", WordOptions::new(MatchMethod::Partial)),
            ("much longer", WordOptions::default()),
        ]);
        let list = Wordlist::build(&cfg, DEFAULT_LIST);
        assert_eq!(
            list.find("short").map(|w| w.match_method),
            Some(MatchMethod::Partial)
        );
        assert_eq!(list.find(0usize).map(|w| w.value.as_str()), Some("much longer"));
        assert!(list.find("missing").is_none());
        assert!(list.find(2usize).is_none());
    }

    #[test]
    fn test_list_membership() {
        let cfg = config(&[
            ("everywhere", WordOptions::default()),
            ("first", WordOptions::default().lists([1])),
            ("both", WordOptions::default().lists([1, 2])),
        ]);
        assert_eq!(Wordlist::build(&cfg, 0).len(), 3);
        assert_eq!(Wordlist::build(&cfg, 1).list(), vec!["first", "both"]);
        assert_eq!(Wordlist::build(&cfg, 2).list(), vec!["both"]);
    }
}
