use crate::word::{Hit, Replacement, Word};

use super::policy::RewritePolicy;

/// Deletes matches without leaving doubled or missing spaces behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Remove;

impl RewritePolicy for Remove {
    fn rewrite(&self, hit: &Hit<'_>, _word: &Word) -> Replacement {
        let (lead, trail) = (hit.lead(), hit.trail());
        if !hit.has_boundaries() || (lead.is_empty() && trail.is_empty()) {
            return remove_between(hit);
        }

        let at_start = lead.is_empty() && (hit.start() == 0 || hit.lead_consumed());
        let (text, claimed) = boundary_left(lead, trail, at_start);
        Replacement::new(text, hit.body_end() + claimed)
    }

    fn name(&self) -> &str {
        "remove"
    }
}

/// Removal without captured boundaries: swallow the following whitespace
/// when the match sits at the start of the text or after whitespace.
fn remove_between(hit: &Hit<'_>) -> Replacement {
    let haystack = hit.haystack();
    let before = haystack[..hit.body_start()].chars().next_back();
    let after = haystack[hit.end()..].chars().next();
    match after {
        Some(a) if a.is_whitespace() && before.map_or(true, char::is_whitespace) => {
            Replacement::new("", hit.end() + a.len_utf8())
        }
        _ => Replacement::new("", hit.end()),
    }
}

/// What is emitted in place of `lead` + word, and how many bytes of `trail`
/// are claimed with it.
///
/// The trail stays in the text, where it separates what follows and can lead
/// the next match. Whitespace at the end of the lead goes, punctuation stays.
/// With nothing before the match, the trail's leading whitespace goes too.
fn boundary_left<'a>(lead: &'a str, trail: &str, at_start: bool) -> (&'a str, usize) {
    if at_start {
        ("", trail.len() - trail.trim_start().len())
    } else {
        (lead.trim_end(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_spaces_keeps_trailing_space() {
        assert_eq!(boundary_left(" ", " ", false), ("", 0));
    }

    #[test]
    fn test_at_edges() {
        assert_eq!(boundary_left("", " ", true), ("", 1));
        assert_eq!(boundary_left(" ", "", false), ("", 0));
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(boundary_left(", ", " ", false), (",", 0));
        assert_eq!(boundary_left("", ", ", true), ("", 0));
        assert_eq!(boundary_left("-", "!", false), ("-", 0));
    }
}
