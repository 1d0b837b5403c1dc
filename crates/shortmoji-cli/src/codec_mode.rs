/// The codec direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecMode {
    /// Decode from `:shortcode:` to glyphs.
    Decode,

    /// Encode from glyphs to `:shortcode:`.
    Encode,
}

/// Codec mode argument group; decoding is the default.
#[derive(clap::Args, Debug)]
#[group(required = false, multiple = false)]
pub struct CodecModeArgs {
    /// Decode from `:shortcode:` to glyphs (default).
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,

    /// Encode from glyphs to `:shortcode:`.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,
}

impl CodecModeArgs {
    /// Get the codec mode.
    pub fn mode(&self) -> CodecMode {
        if self.encode && !self.decode {
            CodecMode::Encode
        } else {
            CodecMode::Decode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        let args = |decode, encode| CodecModeArgs { decode, encode };
        assert_eq!(args(false, false).mode(), CodecMode::Decode);
        assert_eq!(args(true, false).mode(), CodecMode::Decode);
        assert_eq!(args(false, true).mode(), CodecMode::Encode);
    }
}
