use unicode_segmentation::UnicodeSegmentation;

use crate::config::Config;
use crate::word::{Hit, Replacement, Word};

use super::policy::RewritePolicy;

/// Masks matches with a censor character, one per visible character.
#[derive(Debug, Clone)]
pub struct Censor {
    pub character: char,
    /// 0 masks to the visible length of the match.
    pub fixed_length: usize,
    pub preserve_first: bool,
    pub preserve_last: bool,
}

impl Censor {
    pub fn from_config(config: &Config) -> Self {
        Self {
            character: config.censor_character,
            fixed_length: config.censor_fixed_length,
            preserve_first: config.preserve_first,
            preserve_last: config.preserve_last,
        }
    }

    /// Mask `text`. Length is counted in grapheme clusters, so an emoji
    /// built from several code points still takes a single mask character.
    pub fn mask(&self, text: &str) -> String {
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        let length = if self.fixed_length > 0 {
            self.fixed_length
        } else {
            graphemes.len()
        };

        let first = graphemes.first().copied().filter(|_| self.preserve_first);
        let last = graphemes
            .last()
            .copied()
            .filter(|_| self.preserve_last && graphemes.len() > usize::from(first.is_some()));
        let kept = usize::from(first.is_some()) + usize::from(last.is_some());

        let mut masked = String::with_capacity(text.len());
        masked.push_str(first.unwrap_or_default());
        masked.extend(std::iter::repeat(self.character).take(length.saturating_sub(kept)));
        masked.push_str(last.unwrap_or_default());
        masked
    }
}

impl RewritePolicy for Censor {
    fn rewrite(&self, hit: &Hit<'_>, _word: &Word) -> Replacement {
        Replacement::new(
            format!("{}{}", hit.lead(), self.mask(hit.body())),
            hit.body_end(),
        )
    }

    fn name(&self) -> &str {
        "censor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn censor(preserve_first: bool, preserve_last: bool, fixed_length: usize) -> Censor {
        Censor {
            character: '*',
            fixed_length,
            preserve_first,
            preserve_last,
        }
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(censor(false, false, 0).mask("word"), "****");
    }

    #[test]
    fn test_preserve_first_and_last() {
        assert_eq!(censor(true, false, 0).mask("word"), "w***");
        assert_eq!(censor(false, true, 0).mask("word"), "***d");
        assert_eq!(censor(true, true, 0).mask("word"), "w**d");
    }

    #[test]
    fn test_fixed_length() {
        assert_eq!(censor(false, false, 3).mask("words"), "***");
        assert_eq!(censor(true, false, 3).mask("words"), "w**");
    }

    #[test]
    fn test_emoji_counts_as_one() {
        assert_eq!(censor(false, false, 0).mask("🖕"), "*");
        assert_eq!(censor(false, false, 0).mask("👍🏽"), "*");
        assert_eq!(censor(false, false, 0).mask("🇺🇸🇺🇸"), "**");
    }

    #[test]
    fn test_single_grapheme_with_both_preserved_is_not_duplicated() {
        assert_eq!(censor(true, true, 0).mask("a"), "a");
    }
}
