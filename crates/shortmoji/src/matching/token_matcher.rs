//! # Token Matcher

use regex::Regex;

use crate::{
    errors::SMResult,
    matching::{CandidateToken, MatchStrategy},
    regex::{TOKEN_PATTERN, registry_token_pattern},
    registry::EmojiRegistry,
};

/// Compiled `:token:` scanner.
///
/// Immutable once built; a matcher for [`MatchStrategy::Registry`] is tied
/// to the alias set of the registry it was built from, and must be rebuilt
/// with it.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    strategy: MatchStrategy,

    /// Capture group 1 is the alias, when a candidate is reported.
    re: Regex,
}

impl TokenMatcher {
    /// Build a matcher for the given strategy.
    ///
    /// ## Arguments
    /// * `strategy` - the candidate selection strategy.
    /// * `registry` - the alias source for [`MatchStrategy::Registry`];
    ///   ignored by [`MatchStrategy::Grammar`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(registry)))]
    pub fn new(
        strategy: MatchStrategy,
        registry: &EmojiRegistry,
    ) -> SMResult<Self> {
        match strategy {
            MatchStrategy::Grammar => Self::grammar(),
            MatchStrategy::Registry => Self::for_registry(registry),
        }
    }

    /// Build a [`MatchStrategy::Grammar`] matcher.
    pub fn grammar() -> SMResult<Self> {
        let re = Regex::new(TOKEN_PATTERN)?;
        Ok(Self {
            strategy: MatchStrategy::Grammar,
            re,
        })
    }

    /// Build a [`MatchStrategy::Registry`] matcher from the registry's aliases.
    pub fn for_registry(registry: &EmojiRegistry) -> SMResult<Self> {
        let aliases = registry.aliases().collect::<Vec<_>>();
        let pattern = registry_token_pattern(&aliases);

        log::debug!(
            "compiling registry token matcher: {} aliases, {} pattern bytes",
            aliases.len(),
            pattern.len()
        );

        let re = regex::RegexBuilder::new(&pattern)
            .size_limit(pattern.len().saturating_mul(1024).max(1 << 24))
            .build()?;

        Ok(Self {
            strategy: MatchStrategy::Registry,
            re,
        })
    }

    /// The strategy this matcher was built with.
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// The underlying regex pattern.
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// Scan `text` for candidates, left to right.
    ///
    /// Each call starts over from the start of `text`; the matcher holds
    /// no scan state of its own.
    pub fn scan<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> CandidateIter<'r, 'h> {
        CandidateIter {
            captures: self.re.captures_iter(text),
        }
    }
}

/// Lazy iterator over the [`CandidateToken`]s of one scan.
pub struct CandidateIter<'r, 'h> {
    captures: regex::CaptureMatches<'r, 'h>,
}

impl<'h> Iterator for CandidateIter<'_, 'h> {
    type Item = CandidateToken<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.captures.by_ref() {
            // Spans without the alias group are consumed, never reported.
            if let (Some(token), Some(alias)) = (caps.get(0), caps.get(1)) {
                return Some(CandidateToken {
                    alias: alias.as_str(),
                    span: token.range(),
                });
            }
        }
        None
    }
}
