//! # Token Matching
//!
//! A [`TokenMatcher`] scans text for `:token:` spans, and reports
//! [`CandidateToken`]s for the decoder to resolve.
//!
//! The [`MatchStrategy`] picks what counts as a candidate:
//! * [`MatchStrategy::Grammar`] - every span satisfying the token grammar.
//! * [`MatchStrategy::Registry`] - only spans whose body is a registered alias.
//!
//! Both strategies consume exactly the same spans, so decoders built on
//! either produce identical output; the registry strategy never reports
//! a candidate which would fail lookup.

mod candidate;
mod match_strategy;
mod token_matcher;

#[doc(inline)]
pub use candidate::CandidateToken;
#[doc(inline)]
pub use match_strategy::MatchStrategy;
#[doc(inline)]
pub use token_matcher::{CandidateIter, TokenMatcher};
