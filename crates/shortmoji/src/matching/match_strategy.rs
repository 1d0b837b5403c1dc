//! # Match Strategy

/// How a [`crate::matching::TokenMatcher`] selects candidates.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStrategy {
    /// Report every span satisfying the token grammar;
    /// the decoder discards those which fail lookup.
    Grammar,

    /// Report only spans whose body is a registered alias.
    #[default]
    Registry,
}
