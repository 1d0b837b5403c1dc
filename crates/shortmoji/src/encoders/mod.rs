//! # Glyph Encoders
//!
//! The reverse of decoding: [`GlyphEncoder`] replaces emoji glyphs
//! with their canonical `:alias:` shortcodes.

mod glyph_encoder;

#[doc(inline)]
pub use glyph_encoder::GlyphEncoder;
