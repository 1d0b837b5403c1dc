//! # `shortmoji` Shortcode Decoder
//!
//! This replaces `:shortcode:` tokens embedded in arbitrary text
//! with their emoji glyphs, in a single left-to-right pass.
//!
//! See:
//! * [`registry`] to build an immutable alias lookup table from a source list.
//! * [`matching`] to find candidate `:token:` spans in text.
//! * [`decoders`] to decode shortcodes into glyphs.
//! * [`encoders`] to encode glyphs back into shortcodes.
//!
//! A built-in source list is available through:
//! * [`builtin`]
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Decoding With The Built-In Table
//!
//! ```rust
//! use shortmoji::decoders::TextDecoder;
//!
//! let decoder = shortmoji::builtin::shared_decoder()?;
//! assert_eq!(decoder.decode("ship it :+1:"), "ship it \u{1f44d}");
//! # Ok::<(), shortmoji::errors::ShortmojiError>(())
//! ```
//!
//! ## Decoding With A Custom Table
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use shortmoji::decoders::{EmojiDecoder, TextDecoder};
//! use shortmoji::matching::MatchStrategy;
//! use shortmoji::registry::{Emoji, EmojiRegistry};
//!
//! let registry = EmojiRegistry::build([
//!     Emoji::new("\u{1f525}", ["fire", "flame"]),
//!     Emoji::new("\u{1f680}", ["rocket"]),
//! ])?;
//!
//! let decoder = EmojiDecoder::new(Arc::new(registry), MatchStrategy::Registry)?;
//! assert_eq!(decoder.decode(":rocket::flame: :nope:"), "\u{1f680}\u{1f525} :nope:");
//! # Ok::<(), shortmoji::errors::ShortmojiError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod builtin;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod matching;
pub mod regex;
pub mod registry;
pub mod types;

#[doc(inline)]
pub use decoders::{DecoderOptions, EmojiDecoder, TextDecoder};
#[doc(inline)]
pub use encoders::GlyphEncoder;
#[doc(inline)]
pub use errors::{SMResult, ShortmojiError};
#[doc(inline)]
pub use matching::{CandidateToken, MatchStrategy, TokenMatcher};
#[doc(inline)]
pub use registry::{Emoji, EmojiRegistry};
