use std::collections::HashSet;

use crate::config::{Config, MatchMethod};
use crate::word::{Hit, Word};

/// Text exempt from filtering even though a word matched it.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    exact: HashSet<String>,
    /// Stored lowercased.
    insensitive: HashSet<String>,
}

impl Allowlist {
    pub fn new<I, J, S, T>(exact: I, insensitive: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: AsRef<str>,
    {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            insensitive: insensitive
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.word_allowlist.iter().cloned(),
            config.i_word_allowlist.iter(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.insensitive.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.exact.contains(text)
            || (!self.insensitive.is_empty() && self.insensitive.contains(&text.to_lowercase()))
    }

    /// Whether this occurrence of `word` is exempt.
    ///
    /// The matched body is checked; for partial words the whole token the
    /// match sits in is checked too, so allowing `classic` exempts the `ass`
    /// inside it.
    pub fn allows(&self, hit: &Hit<'_>, word: &Word) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.contains(hit.body()) {
            return true;
        }
        word.match_method == MatchMethod::Partial
            && self.contains(enclosing_token(hit.haystack(), hit.body_start(), hit.body_end()))
    }
}

/// Expand `start..end` over adjacent word characters.
fn enclosing_token(haystack: &str, start: usize, end: usize) -> &str {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = haystack[..start]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word(c))
        .last()
        .map_or(start, |(i, _)| i);
    let end = haystack[end..]
        .char_indices()
        .take_while(|&(_, c)| is_word(c))
        .last()
        .map_or(end, |(i, c)| end + i + c.len_utf8());
    &haystack[start..end]
}
