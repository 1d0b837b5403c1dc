//! # Glyph Encoder

use aho_corasick::{AhoCorasick, MatchKind};

use crate::{errors::SMResult, registry::EmojiRegistry, types::SMHashSet};

/// Replaces entry values with their canonical `:alias:` shortcode.
///
/// Matching is leftmost-longest, so a glyph with a variation selector
/// wins over its bare prefix. When several entries share a value,
/// the first one registered wins.
#[derive(Debug, Clone)]
pub struct GlyphEncoder {
    automaton: AhoCorasick,

    /// Replacement shortcodes, by pattern index.
    codes: Vec<String>,
}

impl GlyphEncoder {
    /// Build an encoder over every value in `registry`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(registry)))]
    pub fn from_registry(registry: &EmojiRegistry) -> SMResult<Self> {
        let mut seen: SMHashSet<&str> = SMHashSet::default();
        let mut values = Vec::with_capacity(registry.len());
        let mut codes = Vec::with_capacity(registry.len());

        for entry in registry.entries() {
            let Some(code) = entry.code() else {
                continue;
            };
            if entry.value().is_empty() || !seen.insert(entry.value()) {
                continue;
            }
            values.push(entry.value());
            codes.push(code);
        }

        log::debug!("building glyph encoder: {} values", values.len());

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&values)?;

        Ok(Self { automaton, codes })
    }

    /// Encode `text`, appending the result to `buf`.
    pub fn encode_into(
        &self,
        text: &str,
        buf: &mut String,
    ) {
        self.automaton
            .replace_all_with(text, buf, |mat, _, dst| {
                dst.push_str(&self.codes[mat.pattern().as_usize()]);
                true
            });
    }

    /// Encode `text` into a new string.
    pub fn encode(
        &self,
        text: &str,
    ) -> String {
        let mut buf = String::with_capacity(text.len());
        self.encode_into(text, &mut buf);
        buf
    }
}
