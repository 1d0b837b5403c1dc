#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use divan::{Bencher, black_box, counter::BytesCount};
use regex::{Captures, Regex};
use strum::IntoEnumIterator;
use shortmoji::{
    builtin::{BUILTIN_EMOJI, builtin_registry},
    decoders::{EmojiDecoder, TextDecoder},
    encoders::GlyphEncoder,
    matching::MatchStrategy,
    regex::TOKEN_PATTERN,
    registry::{Emoji, EmojiRegistry},
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static BASE_STRING: &str = "  Lorem ipsum dolor sit amet, consectetur adipiscing elit. :smile: In tristique
  varius ex, eu viverra turpis faucibus sit amet. Cras sagittis pellentesque
  :heart: velit malesuada pharetra. Ut lectus arcu, vehicula :boom::punch:
  ornare tellus quis, consectetur vulputate risus. Pellentesque quis nunc
  cursus, mattis magna non, :eyes:gravida lacus. In a nisi efficitur, euismod
  ipsum eget, rutrum metus. Nulla sit amet eros sit amet nulla vestibulum
  lacinia. Vivamus :snowman: luctus ante mi, vel pretium lacus congue sed.
  Suspendisse ultricies consequat maximus. Maecenas :train: consequat in diam
  ut egestas. :no_entry_sign: this is
  :+1: and :-1: have non-word characters in them.
";

fn base_text() -> String {
    BASE_STRING.repeat(10)
}

static REGISTRY: LazyLock<Arc<EmojiRegistry>> =
    LazyLock::new(|| Arc::new(builtin_registry().unwrap()));

static ENTRIES: LazyLock<Vec<Emoji>> =
    LazyLock::new(|| BUILTIN_EMOJI.iter().map(Emoji::from).collect());

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

fn decoder(strategy: MatchStrategy) -> EmojiDecoder {
    EmojiDecoder::new(REGISTRY.clone(), strategy).unwrap()
}

/// Grammar scan with a linear search over entries per token.
fn linear_scan_decode(text: &str) -> String {
    TOKEN_RE
        .replace_all(text, |caps: &Captures| {
            let alias = &caps[1];
            match ENTRIES.iter().find(|e| e.has_alias(alias)) {
                Some(emoji) => emoji.value().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

mod decode {
    use super::*;

    #[divan::bench]
    fn linear_scan(bencher: Bencher) {
        let text = base_text();
        bencher
            .counter(BytesCount::of_str(&text))
            .bench(|| linear_scan_decode(black_box(&text)));
    }

    #[divan::bench(args = MatchStrategy::iter())]
    fn strategy(
        bencher: Bencher,
        strategy: MatchStrategy,
    ) {
        let text = base_text();
        let decoder = decoder(strategy);
        assert_eq!(decoder.decode(&text), linear_scan_decode(&text));

        bencher
            .counter(BytesCount::of_str(&text))
            .bench(|| decoder.decode(black_box(&text)));
    }

    #[divan::bench]
    fn cow_no_tokens(bencher: Bencher) {
        let text = BASE_STRING.replace(':', ";").repeat(10);
        let decoder = decoder(MatchStrategy::Registry);

        bencher
            .counter(BytesCount::of_str(&text))
            .bench(|| decoder.decode_cow(black_box(&text)).len());
    }
}

mod build {
    use super::*;

    #[divan::bench]
    fn registry() -> EmojiRegistry {
        builtin_registry().unwrap()
    }

    #[divan::bench(args = MatchStrategy::iter())]
    fn matcher(strategy: MatchStrategy) -> EmojiDecoder {
        decoder(strategy)
    }
}

#[divan::bench]
fn encode(bencher: Bencher) {
    let text = decoder(MatchStrategy::Registry).decode(&base_text());
    let encoder = GlyphEncoder::from_registry(&REGISTRY).unwrap();

    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| encoder.encode(black_box(&text)));
}
