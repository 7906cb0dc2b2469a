use rand::seq::SliceRandom;

use crate::config::{Config, MatchMethod};
use crate::word::{Hit, Replacement, Word};

use super::policy::RewritePolicy;

/// Replaces matches with the word's substitution.
#[derive(Debug, Clone)]
pub struct Substitute {
    pub default_substitution: String,
    pub preserve_case: bool,
    pub mark: bool,
}

impl Substitute {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_substitution: config.default_substitution.clone(),
            preserve_case: config.preserve_case,
            mark: config.substitution_mark,
        }
    }

    /// The substitution for one match, before boundaries are re-attached.
    pub fn substitution_for(&self, hit: &Hit<'_>, word: &Word) -> String {
        let candidate = word
            .substitutions
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(&self.default_substitution);

        let mut sub = if word.match_method == MatchMethod::Regex {
            expand_groups(candidate, hit)
        } else {
            candidate.to_string()
        };
        if self.preserve_case && !word.case_sensitive {
            sub = match_case(hit.body(), &sub);
        }
        if self.mark {
            sub = format!("[{sub}]");
        }
        sub
    }
}

impl RewritePolicy for Substitute {
    fn rewrite(&self, hit: &Hit<'_>, word: &Word) -> Replacement {
        Replacement::new(
            format!("{}{}", hit.lead(), self.substitution_for(hit, word)),
            hit.body_end(),
        )
    }

    fn name(&self) -> &str {
        "substitute"
    }
}

/// Replace `\1`..`\9` in `sub` with the matching capture groups of `hit`.
/// Groups that did not participate expand to nothing.
fn expand_groups(sub: &str, hit: &Hit<'_>) -> String {
    let mut out = String::with_capacity(sub.len());
    let mut chars = sub.chars().peekable();
    while let Some(c) = chars.next() {
        let group = match (c, chars.peek().and_then(|d| d.to_digit(10))) {
            ('\\', Some(n)) if n > 0 => n as usize,
            _ => {
                out.push(c);
                continue;
            }
        };
        chars.next();
        out.push_str(hit.group(group).unwrap_or_default());
    }
    out
}

/// Give `sub` the capitalization pattern of `matched`.
pub fn match_case(matched: &str, sub: &str) -> String {
    if is_all_upper(matched) {
        sub.to_uppercase()
    } else if matched.split_whitespace().count() > 1
        && matched.split_whitespace().all(is_capitalized)
    {
        sub.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
    } else if is_capitalized(matched) {
        capitalize(sub)
    } else {
        sub.to_string()
    }
}

fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

fn is_capitalized(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
