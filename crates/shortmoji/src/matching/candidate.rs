//! # Candidate Tokens

use core::ops::Range;

/// One `:token:` span found by a [`crate::matching::TokenMatcher`].
///
/// Ranges are byte offsets into the scanned text; they always fall on
/// `char` boundaries, as the `:` delimiters are ASCII.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CandidateToken<'h> {
    /// The token body, without delimiters.
    pub alias: &'h str,

    /// The full token span, delimiters included.
    pub span: Range<usize>,
}

impl CandidateToken<'_> {
    /// The byte range of the body, without delimiters.
    pub fn alias_range(&self) -> Range<usize> {
        (self.span.start + 1)..(self.span.end - 1)
    }
}
