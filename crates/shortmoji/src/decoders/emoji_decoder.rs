//! # Registry ``{ alias -> Emoji }`` Decoder

use std::{borrow::Cow, ops::Range, sync::Arc};

use crate::{
    decoders::TextDecoder,
    errors::SMResult,
    matching::{MatchStrategy, TokenMatcher},
    registry::{Emoji, EmojiRegistry},
};

/// A registry-backed [`TextDecoder`].
///
/// Scans once, left to right; each candidate span which resolves in the
/// registry is replaced by the entry value, and everything else is copied
/// verbatim. Substituted values are never re-scanned.
#[derive(Debug, Clone)]
pub struct EmojiDecoder {
    registry: Arc<EmojiRegistry>,

    matcher: TokenMatcher,
}

impl EmojiDecoder {
    /// Build a decoder with the given strategy.
    ///
    /// ## Arguments
    /// * `registry` - the alias table; shared, never mutated.
    /// * `strategy` - the matcher strategy.
    pub fn new(
        registry: Arc<EmojiRegistry>,
        strategy: MatchStrategy,
    ) -> SMResult<Self> {
        let matcher = TokenMatcher::new(strategy, &registry)?;
        Ok(Self::from_parts(registry, matcher))
    }

    /// Build a decoder with the default [`MatchStrategy::Registry`] matcher.
    pub fn from_registry(registry: Arc<EmojiRegistry>) -> SMResult<Self> {
        Self::new(registry, MatchStrategy::default())
    }

    /// Assemble a decoder from an already-built matcher.
    ///
    /// A [`MatchStrategy::Registry`] matcher must come from this same registry.
    pub fn from_parts(
        registry: Arc<EmojiRegistry>,
        matcher: TokenMatcher,
    ) -> Self {
        Self { registry, matcher }
    }

    /// The registry.
    pub fn registry(&self) -> &Arc<EmojiRegistry> {
        &self.registry
    }

    /// The matcher.
    pub fn matcher(&self) -> &TokenMatcher {
        &self.matcher
    }

    /// The matcher strategy.
    pub fn strategy(&self) -> MatchStrategy {
        self.matcher.strategy()
    }

    /// Iterate over the resolved token spans of `text`, left to right.
    pub fn resolved_spans<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (Range<usize>, &'a Emoji)> + 'a {
        self.matcher.scan(text).filter_map(|candidate| {
            self.registry
                .lookup(candidate.alias)
                .map(|emoji| (candidate.span, emoji))
        })
    }

    /// Decode `text`, borrowing it when nothing resolves.
    pub fn decode_cow<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        let mut spans = self.resolved_spans(text).peekable();
        if spans.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut buf = String::with_capacity(text.len());
        let last = write_substitutions(text, spans, &mut buf);
        buf.push_str(&text[last..]);
        Cow::Owned(buf)
    }
}

/// Copy `text` into `buf` up to the end of the last span, substituting spans.
///
/// ## Returns
/// The byte offset in `text` after the last substituted span.
fn write_substitutions<'a, I>(
    text: &str,
    spans: I,
    buf: &mut String,
) -> usize
where
    I: Iterator<Item = (Range<usize>, &'a Emoji)>,
{
    let mut last = 0;
    for (span, emoji) in spans {
        buf.push_str(&text[last..span.start]);
        buf.push_str(emoji.value());
        last = span.end;
    }
    last
}

impl TextDecoder for EmojiDecoder {
    fn decode_into(
        &self,
        text: &str,
        buf: &mut String,
    ) {
        buf.reserve(text.len());
        let last = write_substitutions(text, self.resolved_spans(text), buf);
        buf.push_str(&text[last..]);
    }
}
