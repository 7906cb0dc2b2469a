use unicode_segmentation::UnicodeSegmentation;

/// Optional run of separators allowed between characters.
pub const SEPARATORS: &str = "[-_ ]*";

/// True when `value` has a code point above the single-byte Latin range.
pub fn is_unicode(value: &str) -> bool {
    value.chars().any(|c| c > '\u{ff}')
}

/// True when `value` starts or ends with a non-word character (`word!`, `$word`),
/// where `\b` cannot bound it.
pub fn has_edge_punctuation(value: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let first = value.chars().next();
    let last = value.chars().next_back();
    first.is_some_and(|c| !is_word(c)) || last.is_some_and(|c| !is_word(c))
}

/// Build the escaped pattern body for a literal word or phrase.
///
/// Works per grapheme so a multi-codepoint symbol (flag, skin-toned emoji)
/// repeats as a unit: `👍🏽` becomes `(?:👍🏽)+`, never `👍+🏽+`.
pub fn literal_body(value: &str, repeated: bool, separators: bool) -> String {
    let units: Vec<String> = value
        .graphemes(true)
        .map(|grapheme| {
            let escaped = regex::escape(grapheme);
            if !repeated {
                escaped
            } else if grapheme.chars().count() == 1 {
                format!("{escaped}+")
            } else {
                format!("(?:{escaped})+")
            }
        })
        .collect();

    if separators {
        units.join(SEPARATORS)
    } else {
        units.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_body_is_escaped() {
        assert_eq!(literal_body("a.b", false, false), r"a\.b");
    }

    #[test]
    fn test_repeated_body() {
        assert_eq!(literal_body("ab", true, false), "a+b+");
    }

    #[test]
    fn test_separators_after_repetition() {
        assert_eq!(literal_body("ab", true, true), "a+[-_ ]*b+");
        assert_eq!(literal_body("ab", false, true), "a[-_ ]*b");
    }

    #[test]
    fn test_repeated_multi_codepoint_grapheme() {
        let body = literal_body("👍🏽", true, false);
        assert_eq!(body, "(?:👍🏽)+");
        assert!(regex::Regex::new(&body).is_ok());
    }

    #[test]
    fn test_unicode_detection() {
        assert!(!is_unicode("café"));
        assert!(is_unicode("врата"));
        assert!(is_unicode("🖕"));
    }

    #[test]
    fn test_edge_punctuation() {
        assert!(has_edge_punctuation("word!"));
        assert!(has_edge_punctuation("$money"));
        assert!(!has_edge_punctuation("two words"));
        assert!(!has_edge_punctuation("snake_case"));
    }
}
