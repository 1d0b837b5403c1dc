//! # Built-In Emoji Table
//!
//! A fixed source list of common gemoji-style shortcodes; see [`BUILTIN_EMOJI`].
//!
//! [`shared_decoder`] is the usual entry point for callers which decode on
//! hot paths; it builds the registry and matcher once per process.

mod table;

use std::sync::{Arc, OnceLock};

#[doc(inline)]
pub use table::BUILTIN_EMOJI;

use crate::{
    decoders::EmojiDecoder,
    errors::SMResult,
    registry::{Emoji, EmojiRegistry},
};

/// Const source-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinEmoji {
    /// The substitution value.
    pub value: &'static str,

    /// Aliases, canonical first.
    pub aliases: &'static [&'static str],

    /// Human-readable name.
    pub name: &'static str,
}

impl BuiltinEmoji {
    /// Create a new const entry.
    pub const fn new(
        value: &'static str,
        aliases: &'static [&'static str],
        name: &'static str,
    ) -> Self {
        Self {
            value,
            aliases,
            name,
        }
    }

    /// Convert to a registry [`Emoji`].
    pub fn to_emoji(&self) -> Emoji {
        Emoji::new(self.value, self.aliases.iter().copied()).with_name(self.name)
    }
}

impl From<&BuiltinEmoji> for Emoji {
    fn from(entry: &BuiltinEmoji) -> Self {
        entry.to_emoji()
    }
}

/// Build a fresh registry from [`BUILTIN_EMOJI`].
pub fn builtin_registry() -> SMResult<EmojiRegistry> {
    EmojiRegistry::build(BUILTIN_EMOJI.iter().map(Emoji::from))
}

static SHARED_DECODER: OnceLock<EmojiDecoder> = OnceLock::new();

/// The process-wide built-in decoder.
///
/// The first successful call builds the registry and a
/// [`crate::matching::MatchStrategy::Registry`] matcher;
/// every later call, on any thread, observes that same decoder.
pub fn shared_decoder() -> SMResult<&'static EmojiDecoder> {
    if let Some(decoder) = SHARED_DECODER.get() {
        return Ok(decoder);
    }

    let decoder = EmojiDecoder::from_registry(Arc::new(builtin_registry()?))?;
    Ok(SHARED_DECODER.get_or_init(|| decoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decoders::TextDecoder, registry::validators::is_valid_alias};

    #[test]
    fn test_builtin_registry() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), BUILTIN_EMOJI.len());

        for entry in BUILTIN_EMOJI {
            assert!(!entry.aliases.is_empty(), "{entry:?}");
            for alias in entry.aliases {
                assert!(is_valid_alias(alias), "{alias:?}");
                assert_eq!(registry.lookup(alias).unwrap().value(), entry.value);
            }
        }

        let punch = registry.lookup("facepunch").unwrap();
        assert_eq!(punch.canonical_alias(), Some("punch"));
        assert_eq!(punch.name(), Some("fisted hand sign"));
    }

    #[test]
    fn test_shared_decoder() {
        let decoder = shared_decoder().unwrap();
        assert!(core::ptr::eq(decoder, shared_decoder().unwrap()));

        let handles = (0..4)
            .map(|_| std::thread::spawn(|| shared_decoder().unwrap().decode(":tada: :+1:")))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "\u{1f389} \u{1f44d}");
        }
    }
}
