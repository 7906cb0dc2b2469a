//! Boundary strategy: wraps a pattern body so it only matches where its
//! match method allows.
//!
//! Words outside the single-byte Latin range, and words with punctuation at
//! either edge, cannot rely on `\b`. Their patterns capture the surrounding
//! separators explicitly as `(lead)(body)(trail)`, and the rewrite step
//! re-emits `lead` and `trail` around the rewritten body.

use crate::config::MatchMethod;

// `[\s.,'"+!?|-]` is the separator class standing in for `\b`.
const UNICODE_LEAD: &str = r#"^|[\s.,'"+!?|-]+"#;
const UNICODE_TRAIL: &str = r#"[\s.,'"+!?|-]+|$"#;
const UNICODE_LEAD_OPTIONAL: &str = r#"^|[\s.,'"+!?|-]*"#;
const UNICODE_TRAIL_OPTIONAL: &str = r#"[\s.,'"+!?|-]*|$"#;
const UNICODE_TOKEN: &str = r#"[^\s.,'"+!?|-]"#;

/// Everything a boundary decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryContext {
    pub method: MatchMethod,
    pub unicode: bool,
    pub edge_punctuation: bool,
    pub remove: bool,
}

/// The composed pattern and whether groups 1..=3 are `(lead)(body)(trail)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    pub pattern: String,
    pub grouped: bool,
}

struct Shape {
    lead: &'static str,
    before: &'static str,
    token: Option<&'static str>,
    after: &'static str,
    trail: &'static str,
    grouped: bool,
}

impl Shape {
    fn plain(before: &'static str, token: Option<&'static str>, after: &'static str) -> Self {
        Self {
            lead: "",
            before,
            token,
            after,
            trail: "",
            grouped: false,
        }
    }

    fn grouped(lead: &'static str, token: Option<&'static str>, trail: &'static str) -> Self {
        Self {
            lead,
            before: "",
            token,
            after: "",
            trail,
            grouped: true,
        }
    }

    fn render(&self, body: &str) -> Composed {
        let body = match self.token {
            Some(token) => format!("{token}*{body}{token}*"),
            None => body.to_string(),
        };
        let pattern = if self.grouped {
            format!(
                "({}){}({}){}({})",
                self.lead, self.before, body, self.after, self.trail
            )
        } else {
            format!("{}{}{}", self.before, body, self.after)
        };
        Composed {
            pattern,
            grouped: self.grouped,
        }
    }
}

fn shape(ctx: BoundaryContext) -> Shape {
    let whole = ctx.method == MatchMethod::Whole;
    match ctx.method {
        MatchMethod::Regex => Shape::plain("", None, ""),
        MatchMethod::Partial if ctx.unicode => Shape::grouped("", None, ""),
        MatchMethod::Partial => Shape::plain("", None, ""),
        MatchMethod::Exact if ctx.unicode => Shape::grouped(UNICODE_LEAD, None, UNICODE_TRAIL),
        MatchMethod::Whole if ctx.unicode => Shape::grouped(
            UNICODE_LEAD_OPTIONAL,
            Some(UNICODE_TOKEN),
            UNICODE_TRAIL_OPTIONAL,
        ),
        MatchMethod::Exact | MatchMethod::Whole if ctx.edge_punctuation => {
            Shape::grouped(r"^|\s", whole.then_some(r"\S"), r"\s|$")
        }
        MatchMethod::Exact | MatchMethod::Whole if ctx.remove => Shape {
            lead: r"\s?",
            before: r"\b",
            token: whole.then_some(r"[\w-]"),
            after: r"\b",
            trail: r"\s?",
            grouped: true,
        },
        MatchMethod::Exact | MatchMethod::Whole => {
            Shape::plain(r"\b", whole.then_some(r"[\w-]"), r"\b")
        }
    }
}

/// Wrap `body` in the boundaries required by `ctx`.
pub fn compose(body: &str, ctx: BoundaryContext) -> Composed {
    shape(ctx).render(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(method: MatchMethod) -> BoundaryContext {
        BoundaryContext {
            method,
            unicode: false,
            edge_punctuation: false,
            remove: false,
        }
    }

    #[test]
    fn test_ascii_exact_uses_word_boundaries() {
        let composed = compose("word", ctx(MatchMethod::Exact));
        assert_eq!(composed.pattern, r"\bword\b");
        assert!(!composed.grouped);
    }

    #[test]
    fn test_partial_has_no_boundaries() {
        assert_eq!(compose("word", ctx(MatchMethod::Partial)).pattern, "word");
    }

    #[test]
    fn test_whole_matches_surrounding_token() {
        assert_eq!(
            compose("word", ctx(MatchMethod::Whole)).pattern,
            r"\b[\w-]*word[\w-]*\b"
        );
    }

    #[test]
    fn test_remove_captures_adjacent_whitespace() {
        let composed = compose(
            "word",
            BoundaryContext {
                remove: true,
                ..ctx(MatchMethod::Exact)
            },
        );
        assert_eq!(composed.pattern, r"(\s?)\b(word)\b(\s?)");
        assert!(composed.grouped);
    }

    #[test]
    fn test_edge_punctuation_falls_back_to_whitespace() {
        let composed = compose(
            r"word!",
            BoundaryContext {
                edge_punctuation: true,
                ..ctx(MatchMethod::Exact)
            },
        );
        assert_eq!(composed.pattern, r"(^|\s)(word!)(\s|$)");
    }

    #[test]
    fn test_unicode_exact_uses_workaround_groups() {
        let composed = compose(
            "врата",
            BoundaryContext {
                unicode: true,
                ..ctx(MatchMethod::Exact)
            },
        );
        assert!(composed.grouped);
        assert!(composed.pattern.starts_with(r#"(^|[\s.,'"+!?|-]+)(врата)"#));
        assert!(regex::Regex::new(&composed.pattern).is_ok());
    }

    #[test]
    fn test_regex_is_verbatim() {
        let composed = compose(
            r"c(a|u)t",
            BoundaryContext {
                unicode: true,
                ..ctx(MatchMethod::Regex)
            },
        );
        assert_eq!(composed.pattern, r"c(a|u)t");
        assert!(!composed.grouped);
    }
}
