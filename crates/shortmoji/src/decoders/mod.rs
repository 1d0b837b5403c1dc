//! # Shortcode Decoders
//!
//! Decoder clients should use:
//!
//! * [`EmojiDecoder`] - registry lookup driven by a [`crate::matching::TokenMatcher`].
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any [`TextDecoder`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use shortmoji::builtin::builtin_registry;
//! use shortmoji::decoders::{DecoderOptions, TextDecoder};
//! use shortmoji::matching::MatchStrategy;
//!
//! let registry = Arc::new(builtin_registry()?);
//! let decoder = DecoderOptions::default()
//!     .with_strategy(MatchStrategy::Registry)
//!     .with_parallel(true)
//!     .build(registry)?;
//!
//! let batch = ["ship it :rocket:", ":eyes:gravida"];
//! assert_eq!(
//!     decoder.decode_batch(&batch),
//!     vec!["ship it \u{1f680}".to_string(), "\u{1f440}gravida".to_string()],
//! );
//! # Ok::<(), shortmoji::errors::ShortmojiError>(())
//! ```

pub mod decoder_options;
pub mod emoji_decoder;
pub mod text_decoder;

#[doc(inline)]
pub use decoder_options::DecoderOptions;
#[doc(inline)]
pub use emoji_decoder::EmojiDecoder;
#[doc(inline)]
pub use text_decoder::TextDecoder;
