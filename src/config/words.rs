use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separates multiple substitution candidates in a single `substitution` value.
pub const SUBSTITUTION_DELIMITER: &str = ";;";

/// How a configured word is located in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// The word must appear as a complete word.
    #[default]
    Exact,
    /// The word may appear anywhere, including inside other words.
    Partial,
    /// The word may appear inside a larger token; the whole token is matched.
    Whole,
    /// The word is a raw regular expression.
    Regex,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMethod::Exact => write!(f, "exact"),
            MatchMethod::Partial => write!(f, "partial"),
            MatchMethod::Whole => write!(f, "whole"),
            MatchMethod::Regex => write!(f, "regex"),
        }
    }
}

/// Per-word options as they appear in configuration.
///
/// Unset options fall back to the `default*` values of the owning [`Config`](super::Config)
/// when the word is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_method: Option<MatchMethod>,

    /// Each character may repeat one or more times ("heeello").
    #[serde(default, alias = "repeat", skip_serializing_if = "Option::is_none")]
    pub match_repeated: Option<bool>,

    /// `-`, `_` and space may appear between characters ("h-e l_l-o").
    #[serde(default, alias = "separators", skip_serializing_if = "Option::is_none")]
    pub match_separators: Option<bool>,

    #[serde(default, alias = "case", skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    /// Replacement text. Candidates separated by `;;` are picked at random.
    #[serde(default, alias = "sub", skip_serializing_if = "String::is_empty")]
    pub substitution: String,

    /// Wordlist ids this word belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<u32>,
}

impl WordOptions {
    pub fn new(match_method: MatchMethod) -> Self {
        Self {
            match_method: Some(match_method),
            ..Self::default()
        }
    }

    pub fn repeated(mut self, repeated: bool) -> Self {
        self.match_repeated = Some(repeated);
        self
    }

    pub fn separators(mut self, separators: bool) -> Self {
        self.match_separators = Some(separators);
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn substitution(mut self, substitution: impl Into<String>) -> Self {
        self.substitution = substitution.into();
        self
    }

    pub fn lists(mut self, lists: impl IntoIterator<Item = u32>) -> Self {
        self.lists = lists.into_iter().collect();
        self
    }
}

/// The word dictionary: word value -> options, in insertion order.
///
/// Serialized as a plain map. Document order is kept on load so equal-length
/// words compile in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Words {
    entries: Vec<(String, WordOptions)>,
}

impl Words {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a word. A replaced word keeps its original position.
    pub fn insert(&mut self, value: impl Into<String>, options: WordOptions) -> Option<WordOptions> {
        let value = value.into();
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some((_, existing)) => Some(std::mem::replace(existing, options)),
            None => {
                self.entries.push((value, options));
                None
            }
        }
    }

    pub fn remove(&mut self, value: &str) -> Option<WordOptions> {
        let idx = self.entries.iter().position(|(v, _)| v == value)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, value: &str) -> Option<&WordOptions> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, options)| options)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordOptions)> {
        self.entries.iter().map(|(v, o)| (v.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, WordOptions)> for Words {
    fn from_iter<I: IntoIterator<Item = (S, WordOptions)>>(iter: I) -> Self {
        let mut words = Words::new();
        for (value, options) in iter {
            words.insert(value, options);
        }
        words
    }
}

impl Serialize for Words {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, options) in &self.entries {
            map.serialize_entry(value, options)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Words {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WordsVisitor;

        impl<'de> Visitor<'de> for WordsVisitor {
            type Value = Words;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of words to word options")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Words, A::Error> {
                let mut words = Words::new();
                while let Some((value, options)) =
                    access.next_entry::<String, Option<WordOptions>>()?
                {
                    // `word:` with no options is shorthand for all defaults.
                    words.insert(value, options.unwrap_or_default());
                }
                Ok(words)
            }
        }

        deserializer.deserialize_map(WordsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut words = Words::new();
        words.insert("alpha", WordOptions::new(MatchMethod::Exact));
        words.insert("beta", WordOptions::new(MatchMethod::Partial));
        let old = words.insert("alpha", WordOptions::new(MatchMethod::Whole));

        assert_eq!(old.and_then(|o| o.match_method), Some(MatchMethod::Exact));
        let order: Vec<&str> = words.iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["alpha", "beta"]);
        assert_eq!(
            words.get("alpha").and_then(|o| o.match_method),
            Some(MatchMethod::Whole)
        );
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let yaml = "zeta:\n  matchMethod: partial\nalpha:\nmid:\n  sub: thing\n";
        let words: Words = serde_yaml::from_str(yaml).unwrap();
        let order: Vec<&str> = words.iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
        assert_eq!(words.get("alpha"), Some(&WordOptions::default()));
        assert_eq!(words.get("mid").unwrap().substitution, "thing");
    }

    #[test]
    fn test_unknown_match_method_is_rejected() {
        let yaml = "word:\n  matchMethod: fuzzy\n";
        assert!(serde_yaml::from_str::<Words>(yaml).is_err());
    }

    #[test]
    fn test_remove() {
        let mut words: Words = vec![("a", WordOptions::default()), ("b", WordOptions::default())]
            .into_iter()
            .collect();
        assert!(words.remove("a").is_some());
        assert!(words.remove("a").is_none());
        assert_eq!(words.len(), 1);
    }
}
