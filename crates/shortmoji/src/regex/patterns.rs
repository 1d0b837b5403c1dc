//! # Shortcode Patterns
//!
//! A token is `:body:`, where the body is one optional character which is
//! neither whitespace nor `:`, followed by one or more ASCII word characters
//! or hyphens. This admits `:smile:`, `:+1:` and `:-1:`.

use crate::regex::exact_match_union::exact_match_union_regex_pattern;

macro_rules! token_body {
    () => {
        r"[^\s:]?[0-9A-Za-z_-]+"
    };
}

/// The token body grammar, without delimiters.
pub const TOKEN_BODY_PATTERN: &str = token_body!();

/// The generic token pattern; capture group 1 is the alias.
pub const TOKEN_PATTERN: &str = concat!(":(", token_body!(), "):");

/// Build a registry-constrained token pattern.
///
/// The pattern consumes exactly the spans [`TOKEN_PATTERN`] consumes;
/// but capture group 1 participates only when the body is one of `aliases`.
/// Bodies which are not aliases are matched by a non-capturing branch,
/// and so are consumed without being reported.
///
/// ## Arguments
/// * `aliases` - the known aliases; each should satisfy [`TOKEN_BODY_PATTERN`].
pub fn registry_token_pattern<S: AsRef<str>>(aliases: &[S]) -> String {
    match exact_match_union_regex_pattern(aliases) {
        Some(union) => format!(":(?:{union}|{TOKEN_BODY_PATTERN}):"),
        None => format!(":(?:{TOKEN_BODY_PATTERN}):"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(
        pattern: &str,
        text: &str,
    ) -> Vec<Option<String>> {
        let re = regex::Regex::new(pattern).unwrap();
        re.captures_iter(text)
            .map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    #[test]
    fn test_token_pattern() {
        assert_eq!(TOKEN_PATTERN, r":([^\s:]?[0-9A-Za-z_-]+):");

        assert_eq!(
            aliases(TOKEN_PATTERN, ":smile: :+1: and :-1: : x: :a b: :boom::punch:"),
            vec![
                Some("smile".to_string()),
                Some("+1".to_string()),
                Some("-1".to_string()),
                Some("boom".to_string()),
                Some("punch".to_string()),
            ]
        );

        // The body is ASCII; only the leading character may be wider.
        assert_eq!(aliases(TOKEN_PATTERN, ":é1: :ab\u{e9}:"), vec![Some("é1".to_string())]);
    }

    #[test]
    fn test_registry_token_pattern() {
        let pattern = registry_token_pattern(&["smile", "+1"]);
        assert_eq!(pattern, r":(?:(smile|\+1)|[^\s:]?[0-9A-Za-z_-]+):");

        // Unknown bodies are consumed, but not captured.
        assert_eq!(
            aliases(&pattern, ":foo:smile: :smile: :+1:"),
            vec![None, Some("smile".to_string()), Some("+1".to_string())]
        );
    }

    #[test]
    fn test_empty_registry_token_pattern() {
        let empty: [&str; 0] = [];
        let pattern = registry_token_pattern(&empty);
        assert_eq!(aliases(&pattern, ":smile: :x:"), vec![None, None]);
    }
}
