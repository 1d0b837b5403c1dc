//! # Emoji Registry
//!
//! [`Emoji`] entries bind a set of aliases to one substitution value;
//! an [`EmojiRegistry`] is the immutable `{ alias -> entry }` table built
//! once from a source list of entries.

mod emoji;
mod emoji_registry;
pub mod validators;

#[doc(inline)]
pub use emoji::Emoji;
#[doc(inline)]
pub use emoji_registry::EmojiRegistry;
