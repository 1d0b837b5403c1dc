//! # Alias Validators

/// Is `c` a token body character? (ASCII word characters and `-`).
#[inline]
pub fn is_body_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Is `c` admissible as the optional leading character of a token body?
#[inline]
pub fn is_leading_char(c: char) -> bool {
    c != ':' && !c.is_whitespace()
}

/// Does `alias` satisfy the token body grammar?
///
/// This is the anchored form of [`crate::regex::TOKEN_BODY_PATTERN`];
/// an alias which fails this can never be matched in text.
pub fn is_valid_alias(alias: &str) -> bool {
    let mut chars = alias.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();

    if rest.is_empty() {
        return is_body_char(first);
    }
    is_leading_char(first) && rest.chars().all(is_body_char)
}
