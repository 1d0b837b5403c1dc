//! # Parallel Decoder

use crate::decoders::TextDecoder;

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
/// Single texts are decoded on the calling thread.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<D: TextDecoder> {
    /// Wrapped decoder.
    pub inner: D,
}

impl<D: TextDecoder> ParallelRayonDecoder<D> {
    /// Create a new parallel decoder.
    ///
    /// ## Arguments
    /// * `inner` - The decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TextDecoder> TextDecoder for ParallelRayonDecoder<D> {
    fn decode_into(
        &self,
        text: &str,
        buf: &mut String,
    ) {
        self.inner.decode_into(text, buf)
    }

    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<String> {
        use rayon::prelude::*;

        batch
            .into_par_iter()
            .map(|text| self.inner.decode(text))
            .collect()
    }
}
