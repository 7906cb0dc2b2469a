pub mod boundary;
pub mod phrase;

use std::fmt;

use regex::{Captures, Regex, RegexBuilder};

use crate::config::{Config, FilterMethod, MatchMethod, WordOptions, SUBSTITUTION_DELIMITER};
use crate::error::{CensorkitError, Result};

use boundary::{BoundaryContext, Composed};

/// A configured word with every option resolved against the config defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub value: String,
    pub match_method: MatchMethod,
    pub match_repeated: bool,
    pub match_separators: bool,
    pub case_sensitive: bool,
    /// Substitution candidates; empty means use the config default.
    pub substitutions: Vec<String>,
    pub lists: Vec<u32>,
    /// Contains a code point above U+00FF.
    pub unicode: bool,
}

impl Word {
    pub fn resolve(value: &str, options: &WordOptions, config: &Config) -> Self {
        let case_sensitive = options
            .case_sensitive
            .unwrap_or(config.default_word_case_sensitive);
        let substitutions = options
            .substitution
            .split(SUBSTITUTION_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if case_sensitive {
                    s.to_string()
                } else {
                    s.to_lowercase()
                }
            })
            .collect();

        Self {
            value: value.to_string(),
            match_method: options
                .match_method
                .unwrap_or(config.default_word_match_method),
            match_repeated: options.match_repeated.unwrap_or(config.default_word_repeat),
            match_separators: options
                .match_separators
                .unwrap_or(config.default_word_separators),
            case_sensitive,
            substitutions,
            lists: options.lists.clone(),
            unicode: phrase::is_unicode(value),
        }
    }

    /// Length used for wordlist ordering, in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether this word belongs to wordlist `list_id`. List 0 holds every word.
    pub fn in_list(&self, list_id: u32) -> bool {
        list_id == 0 || self.lists.contains(&list_id)
    }
}

/// Regex flags in JavaScript notation (`g`, `i`, `u`), kept for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchFlags {
    pub case_insensitive: bool,
    pub unicode: bool,
}

impl fmt::Display for MatchFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("g")?;
        if self.case_insensitive {
            f.write_str("i")?;
        }
        if self.unicode {
            f.write_str("u")?;
        }
        Ok(())
    }
}

/// The compiled pattern for one word. Immutable once built.
#[derive(Debug, Clone)]
pub struct Matcher {
    word: Word,
    regex: Regex,
    flags: MatchFlags,
    grouped: bool,
}

impl Matcher {
    /// Compile the matcher for `value`. `filter_method` matters because removal
    /// also consumes adjacent whitespace.
    pub fn new(value: &str, options: &WordOptions, config: &Config) -> Result<Self> {
        Self::from_word(Word::resolve(value, options, config), config.filter_method)
    }

    pub fn from_word(word: Word, filter_method: FilterMethod) -> Result<Self> {
        if word.value.trim().is_empty() {
            return Err(CensorkitError::Pattern {
                word: word.value,
                reason: "word is empty".into(),
            });
        }

        let body = match word.match_method {
            MatchMethod::Regex => word.value.clone(),
            _ => phrase::literal_body(&word.value, word.match_repeated, word.match_separators),
        };
        let Composed { pattern, grouped } = boundary::compose(
            &body,
            BoundaryContext {
                method: word.match_method,
                unicode: word.unicode,
                edge_punctuation: phrase::has_edge_punctuation(&word.value),
                remove: filter_method == FilterMethod::Remove,
            },
        );

        let flags = MatchFlags {
            case_insensitive: !word.case_sensitive,
            unicode: word.unicode,
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(flags.case_insensitive)
            .build()
            .map_err(|e| CensorkitError::Pattern {
                word: word.value.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            word,
            regex,
            flags,
            grouped,
        })
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    /// True when the pattern captures `(lead)(body)(trail)` instead of using `\b`.
    pub fn boundary_groups(&self) -> bool {
        self.grouped
    }

    /// True when the unicode boundary workaround is in effect.
    pub fn unicode_workaround(&self) -> bool {
        self.grouped && self.word.unicode
    }

    /// Replace every match in `haystack` with the output of `rewrite`.
    ///
    /// For grouped patterns the search resumes right after the body, so the
    /// trailing boundary can serve as the leading boundary of the next match
    /// (`врата врата`) even when the replacement claimed it. The part of such a
    /// lead that was already replaced is cut from the next hit's `lead`.
    pub fn replace_all<F>(&self, haystack: &str, mut rewrite: F) -> String
    where
        F: FnMut(&Hit<'_>) -> Replacement,
    {
        let mut out = String::with_capacity(haystack.len());
        let mut copied = 0;
        let mut at = 0;
        let mut last_end = None;

        while at <= haystack.len() {
            let Some(caps) = self.regex.captures_at(haystack, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if whole.is_empty() && last_end == Some(whole.start()) {
                match next_boundary(haystack, whole.start()) {
                    Some(next) => {
                        at = next;
                        continue;
                    }
                    None => break,
                }
            }

            let hit = Hit::new(haystack, &caps, whole, self.grouped, copied);
            if hit.body_start() < copied {
                at = copied;
                continue;
            }
            let replacement = rewrite(&hit);
            let end = replacement.end.clamp(hit.body_end(), haystack.len());

            out.push_str(&haystack[copied..hit.start()]);
            out.push_str(&replacement.text);
            copied = end;
            last_end = Some(end);

            // A claimed trailing boundary may still lead the next match.
            let resume = if self.grouped { hit.body_end() } else { end };
            if resume > whole.start() {
                at = resume;
            } else {
                match next_boundary(haystack, resume) {
                    Some(next) => at = next,
                    None => break,
                }
            }
        }

        out.push_str(&haystack[copied..]);
        out
    }
}

fn next_boundary(haystack: &str, at: usize) -> Option<usize> {
    haystack[at..].chars().next().map(|c| at + c.len_utf8())
}

/// One regex match, split into boundary parts.
#[derive(Debug)]
pub struct Hit<'h> {
    haystack: &'h str,
    lead: &'h str,
    body: regex::Match<'h>,
    trail: &'h str,
    end: usize,
    grouped: bool,
    lead_consumed: bool,
    groups: Vec<Option<&'h str>>,
}

impl<'h> Hit<'h> {
    /// `floor` is the end of text already replaced; a lead overlapping it is cut short.
    fn new(
        haystack: &'h str,
        caps: &Captures<'h>,
        whole: regex::Match<'h>,
        grouped: bool,
        floor: usize,
    ) -> Self {
        let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        if grouped {
            let lead = caps.get(1).map_or("", |m| {
                let start = m.start().max(floor).min(m.end());
                &haystack[start..m.end()]
            });
            Self {
                haystack,
                lead,
                body: caps.get(2).unwrap_or(whole),
                trail: part(3),
                end: whole.end(),
                grouped,
                lead_consumed: caps.get(1).is_some_and(|m| m.start() < floor),
                groups: Vec::new(),
            }
        } else {
            Self {
                haystack,
                lead: "",
                body: whole,
                trail: "",
                end: whole.end(),
                grouped,
                lead_consumed: false,
                groups: caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect(),
            }
        }
    }

    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// True when `lead` and `trail` were captured by the pattern.
    pub fn has_boundaries(&self) -> bool {
        self.grouped
    }

    /// Boundary text captured before the body (grouped patterns only).
    pub fn lead(&self) -> &'h str {
        self.lead
    }

    /// The matched word itself, without boundary captures.
    pub fn body(&self) -> &'h str {
        self.body.as_str()
    }

    /// True when part of the captured lead was already claimed by the previous
    /// replacement, so `lead` holds only what is left of it.
    pub fn lead_consumed(&self) -> bool {
        self.lead_consumed
    }

    /// Boundary text captured after the body (grouped patterns only).
    pub fn trail(&self) -> &'h str {
        self.trail
    }

    /// Start of the text this hit replaces: the lead, or the body when there is none.
    pub fn start(&self) -> usize {
        self.body.start() - self.lead.len()
    }

    pub fn body_start(&self) -> usize {
        self.body.start()
    }

    pub fn body_end(&self) -> usize {
        self.body.end()
    }

    /// End of the whole match, trailing boundary included.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Capture group `n` (1-based) of a raw regex word.
    pub fn group(&self, n: usize) -> Option<&'h str> {
        n.checked_sub(1)
            .and_then(|i| self.groups.get(i).copied())
            .flatten()
    }

    /// Replacement that leaves this occurrence untouched.
    pub fn keep(&self) -> Replacement {
        Replacement::new(format!("{}{}", self.lead, self.body()), self.body_end())
    }
}

/// Text emitted for a hit, replacing the haystack from the hit's start up to `end`.
///
/// `end` is at or after the body end and must fall on a char boundary. Any
/// trailing boundary past `end` stays in the haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub end: usize,
}

impl Replacement {
    pub fn new(text: impl Into<String>, end: usize) -> Self {
        Self {
            text: text.into(),
            end,
        }
    }
}
