//! # Error Types

/// Errors from shortmoji operations.
///
/// Decoding and encoding are total over all inputs;
/// every variant here is raised while *building* a registry or matcher.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShortmojiError {
    /// The same alias was listed more than once in a source list.
    #[error("duplicate alias {alias:?}: first listed for {first:?}, again for {second:?}")]
    DuplicateAlias {
        /// The repeated alias.
        alias: String,

        /// The value of the entry which listed the alias first.
        first: String,

        /// The value of the entry which listed the alias again.
        second: String,
    },

    /// An entry was listed without any aliases.
    #[error("entry {value:?} has no aliases")]
    EmptyAliases {
        /// The value of the offending entry.
        value: String,
    },

    /// An alias which the token grammar can never match.
    #[error("alias {alias:?} is not a valid shortcode")]
    InvalidAlias {
        /// The offending alias.
        alias: String,
    },

    /// A matcher pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// The glyph encoder automaton failed to build.
    #[error(transparent)]
    Encoder(#[from] aho_corasick::BuildError),
}

/// Result type for shortmoji operations.
pub type SMResult<T> = core::result::Result<T, ShortmojiError>;
