//! # Regex Utilities
//!
//! Shortcode matching is done with the [`regex`] crate; this module holds
//! the pattern construction side of that:
//!
//! * [`patterns`] - the `:token:` grammar, as pattern constants.
//! * [`exact_match_union`] - escaped alternations of literal strings,
//!   used to build registry-constrained token patterns.

pub mod exact_match_union;
pub mod patterns;

#[doc(inline)]
pub use exact_match_union::exact_match_union_regex_pattern;
#[doc(inline)]
pub use patterns::{TOKEN_BODY_PATTERN, TOKEN_PATTERN, registry_token_pattern};
