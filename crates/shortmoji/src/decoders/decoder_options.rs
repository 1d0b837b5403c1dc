//! Text Decoder Options
//!
//! Options for building a [`TextDecoder`].

use std::sync::Arc;

use crate::{
    decoders::{EmojiDecoder, TextDecoder},
    errors::SMResult,
    matching::MatchStrategy,
    registry::EmojiRegistry,
};

/// Options for configuring a [`TextDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderOptions {
    /// The matcher strategy.
    pub strategy: MatchStrategy,

    /// Should batch decoding be threaded?
    ///
    /// Enabling parallelism will request a threaded implementation;
    /// it has no effect without the "rayon" feature.
    pub parallel: bool,
}

impl DecoderOptions {
    /// Gets the configured matcher strategy.
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Sets the configured matcher strategy.
    pub fn set_strategy(
        &mut self,
        strategy: MatchStrategy,
    ) {
        self.strategy = strategy;
    }

    /// Sets the configured matcher strategy.
    pub fn with_strategy(
        mut self,
        strategy: MatchStrategy,
    ) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`TextDecoder`] for the given registry.
    pub fn build(
        &self,
        registry: Arc<EmojiRegistry>,
    ) -> SMResult<Arc<dyn TextDecoder>> {
        let decoder = EmojiDecoder::new(registry, self.strategy)?;

        log::debug!(
            "built emoji decoder: strategy={}, parallel={}",
            self.strategy,
            self.parallel
        );

        #[cfg(feature = "rayon")]
        if self.parallel {
            use crate::rayon::ParallelRayonDecoder;
            return Ok(Arc::new(ParallelRayonDecoder::new(decoder)));
        }

        Ok(Arc::new(decoder))
    }
}
