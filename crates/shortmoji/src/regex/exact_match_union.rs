//! Exact Match Union Patterns

/// Create a union pattern of exact matches.
///
/// Alternatives are escaped, and ordered longest-first (then lexically),
/// so the resulting pattern does not depend on the input order.
///
/// ## Arguments
/// * `alts` - A slice of string-like alternatives to union.
///
/// ## Returns
/// A single capture group `(a|b|...)` matching any one alternative;
/// or `None` when `alts` is empty.
pub fn exact_match_union_regex_pattern<S: AsRef<str>>(alts: &[S]) -> Option<String> {
    if alts.is_empty() {
        return None;
    }

    let mut alts = alts.iter().map(|s| s.as_ref()).collect::<Vec<_>>();
    alts.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    alts.dedup();

    let parts = alts.into_iter().map(regex::escape).collect::<Vec<_>>();
    Some(format!("({})", parts.join("|")))
}
