use std::io::{BufRead, Write};

use shortmoji::{
    decoders::{EmojiDecoder, TextDecoder},
    encoders::GlyphEncoder,
    matching::MatchStrategy,
    registry::EmojiRegistry,
};

use crate::{
    codec_mode::{CodecMode, CodecModeArgs},
    input_output::IoArgs,
    registry_source::RegistrySourceArgs,
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    registry: RegistrySourceArgs,

    #[command(flatten)]
    mode: CodecModeArgs,

    /// Matcher strategy: "registry" or "grammar".
    #[arg(long, default_value_t = MatchStrategy::default())]
    strategy: MatchStrategy,

    #[command(flatten)]
    io: IoArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let registry = self.registry.load_registry()?;

        let mut reader = self.io.open_reader()?;
        let mut writer = self.io.open_writer()?;

        match self.mode.mode() {
            CodecMode::Decode => {
                let decoder = EmojiDecoder::new(registry, self.strategy)?;
                log::info!("decoding with the {} strategy", decoder.strategy());
                run_cat(&mut reader, &mut writer, |line, buf| {
                    decoder.decode_into(line, buf)
                })?
            }
            CodecMode::Encode => {
                let encoder = GlyphEncoder::from_registry(&registry)?;
                let encode = |text: &str, buf: &mut String| encoder.encode_into(text, buf);
                if has_multiline_values(&registry) {
                    log::info!("registry values span lines; encoding the whole input at once");
                    run_whole(&mut reader, &mut writer, encode)?
                } else {
                    run_cat(&mut reader, &mut writer, encode)?
                }
            }
        }

        Ok(())
    }
}

/// Does any registry value contain a line break?
///
/// Such values can only be encoded by [`run_whole`].
fn has_multiline_values(registry: &EmojiRegistry) -> bool {
    registry
        .entries()
        .iter()
        .any(|e| e.value().contains(['\n', '\r']))
}

/// Transform the whole input as one string.
fn run_whole<F>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    transform: F,
) -> std::io::Result<()>
where
    F: FnOnce(&str, &mut String),
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut out = String::with_capacity(text.len());
    transform(&text, &mut out);
    writer.write_all(out.as_bytes())?;
    writer.flush()
}

/// Transform line by line, keeping the end-of-line characters.
///
/// Tokens never span a line break, so this matches whole-input decoding.
/// Encoding matches whole-input encoding only when no registry value
/// contains a line break; see [`has_multiline_values`].
fn run_cat<F>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    mut transform: F,
) -> std::io::Result<()>
where
    F: FnMut(&str, &mut String),
{
    let mut line = String::new();
    let mut out = String::new();
    while reader.read_line(&mut line)? > 0 {
        transform(&line, &mut out);
        writer.write_all(out.as_bytes())?;
        writer.flush()?;

        line.clear();
        out.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use shortmoji::{builtin::builtin_registry, registry::Emoji};

    use super::*;

    #[test]
    fn test_run_cat() {
        let registry = Arc::new(builtin_registry().unwrap());
        let decoder = EmojiDecoder::from_registry(registry.clone()).unwrap();
        let encoder = GlyphEncoder::from_registry(&registry).unwrap();

        let source = "hello :wave:\n:boom::punch: :nope:\nno newline :tada:";

        let mut decoded = Vec::new();
        run_cat(&mut Cursor::new(source), &mut decoded, |line, buf| {
            decoder.decode_into(line, buf)
        })
        .unwrap();
        let decoded = String::from_utf8(decoded).unwrap();
        assert_eq!(
            decoded,
            "hello \u{1f44b}\n\u{1f4a5}\u{1f44a} :nope:\nno newline \u{1f389}"
        );
        assert_eq!(decoded, decoder.decode(source));

        let mut encoded = Vec::new();
        run_cat(&mut Cursor::new(decoded), &mut encoded, |line, buf| {
            encoder.encode_into(line, buf)
        })
        .unwrap();
        assert_eq!(String::from_utf8(encoded).unwrap(), source);
    }

    #[test]
    fn test_multiline_values() {
        let registry = EmojiRegistry::build([
            Emoji::new("\u{1f44b}", ["wave"]),
            Emoji::new("fn main() {\n}", ["main_fn"]),
        ])
        .unwrap();
        assert!(has_multiline_values(&registry));
        assert!(!has_multiline_values(&builtin_registry().unwrap()));

        let encoder = GlyphEncoder::from_registry(&registry).unwrap();
        let source = "hi \u{1f44b}\nfn main() {\n}\n";

        let mut by_line = Vec::new();
        run_cat(&mut Cursor::new(source), &mut by_line, |line, buf| {
            encoder.encode_into(line, buf)
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(by_line).unwrap(),
            "hi :wave:\nfn main() {\n}\n"
        );

        let mut whole = Vec::new();
        run_whole(&mut Cursor::new(source), &mut whole, |text, buf| {
            encoder.encode_into(text, buf)
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(whole).unwrap(),
            "hi :wave:\n:main_fn:\n"
        );
    }
}
