//! # Text Decoder Trait

use std::sync::Arc;

/// Trait for shortcode decoders.
///
/// Decoding is total: every string decodes, and text which is not a
/// resolvable token is copied through unchanged.
pub trait TextDecoder: Send + Sync {
    /// Decode `text`, appending the result to `buf`.
    ///
    /// ## Arguments
    /// * `text` - the text to decode.
    /// * `buf` - the output buffer; existing content is kept.
    fn decode_into(
        &self,
        text: &str,
        buf: &mut String,
    );

    /// Decode `text` into a new string.
    fn decode(
        &self,
        text: &str,
    ) -> String {
        let mut buf = String::with_capacity(text.len());
        self.decode_into(text, &mut buf);
        buf
    }

    /// Decode a batch of texts.
    ///
    /// ## Returns
    /// One decoded string per input, in input order.
    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<String> {
        batch.iter().map(|text| self.decode(text)).collect()
    }
}

impl<D> TextDecoder for Arc<D>
where
    D: TextDecoder + ?Sized,
{
    fn decode_into(
        &self,
        text: &str,
        buf: &mut String,
    ) {
        (**self).decode_into(text, buf)
    }

    fn decode(
        &self,
        text: &str,
    ) -> String {
        (**self).decode(text)
    }

    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<String> {
        (**self).decode_batch(batch)
    }
}
