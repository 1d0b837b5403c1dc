#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use proptest::prelude::*;
use regex::{Captures, Regex};
use shortmoji::{
    builtin::{BUILTIN_EMOJI, builtin_registry},
    decoders::{EmojiDecoder, TextDecoder},
    matching::MatchStrategy,
    regex::TOKEN_PATTERN,
    registry::{Emoji, EmojiRegistry},
};

const BASE_STRING: &str = "  Lorem ipsum dolor sit amet, consectetur adipiscing elit. :smile: In tristique
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

const SAMPLES: &[&str] = &[
    BASE_STRING,
    "",
    "no tokens at all",
    ":totally_unknown_code:",
    ":boom::punch:",
    ":+1: and :-1:",
    ":eyes:gravida",
    ":foo:smile:",
    "time is 12:30:00",
    "::: :: : :smile",
    "smile: :smile :smile:",
    ":-1::+1::100:",
    "caf\u{00e9} :coffee: na\u{00ef}ve \u{4f60}\u{597d} :tada:",
    ":\u{00e9}1: :x\u{00e9}: :\u{1f44d}up:",
    "tabs\t:fire:\tand\nnewlines\n:rocket:\n",
    ": smile: :smile :",
    ":thumbsup::thumbsdown::facepunch::collision:",
];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

static ENTRIES: LazyLock<Vec<Emoji>> =
    LazyLock::new(|| BUILTIN_EMOJI.iter().map(Emoji::from).collect());

static GRAMMAR: LazyLock<EmojiDecoder> = LazyLock::new(|| decoder(MatchStrategy::Grammar));

static REGISTRY: LazyLock<EmojiDecoder> = LazyLock::new(|| decoder(MatchStrategy::Registry));

/// The naive reference: grammar scan, then a linear search over entries per token.
fn reference_decode(text: &str) -> String {
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

fn decoder(strategy: MatchStrategy) -> EmojiDecoder {
    EmojiDecoder::new(Arc::new(builtin_registry().unwrap()), strategy).unwrap()
}

#[test]
fn base_string_decodes() {
    let decoded = REGISTRY.decode(BASE_STRING);

    for glyph in [
        "\u{1f604}",
        "\u{2764}\u{fe0f}",
        "\u{1f4a5}\u{1f44a}",
        "\u{1f440}gravida",
        "\u{26c4}",
        "\u{1f68b}",
        "\u{1f6ab}",
        "\u{1f44d} and \u{1f44e}",
    ] {
        assert!(decoded.contains(glyph), "missing {glyph:?} in {decoded:?}");
    }
    assert!(!decoded.contains(":smile:"));
}

#[test]
fn strategies_match_reference() {
    for text in SAMPLES {
        let expected = reference_decode(text);
        assert_decoded_eq(&GRAMMAR.decode(text), &expected, text);
        assert_decoded_eq(&REGISTRY.decode(text), &expected, text);
        assert_eq!(REGISTRY.decode_cow(text), expected);
    }
}

fn assert_decoded_eq(
    actual: &str,
    expected: &str,
    text: &str,
) {
    if actual != expected {
        let diff = similar::TextDiff::from_chars(expected, actual);
        panic!(
            "decode mismatch for {text:?}:\n{}",
            diff.unified_diff().header("expected", "actual")
        );
    }
}

#[test]
fn batch_matches_single() {
    let batch = REGISTRY.decode_batch(SAMPLES);
    assert_eq!(batch.len(), SAMPLES.len());
    for (text, decoded) in SAMPLES.iter().zip(batch) {
        assert_eq!(decoded, REGISTRY.decode(text));
    }
}

#[test]
fn duplicate_alias_is_rejected() {
    let result = EmojiRegistry::build([
        Emoji::new("\u{1f44d}", ["+1", "thumbsup"]),
        Emoji::new("\u{1f44c}", ["thumbsup"]),
    ]);
    assert!(result.is_err());
}

/// Text drawn from an alphabet dense in delimiters and alias characters.
fn token_soup() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(":".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("+".to_string()),
            Just("-".to_string()),
            Just("_".to_string()),
            Just("\u{00e9}".to_string()),
            Just("\u{1f44d}".to_string()),
            prop::sample::select(vec!["smile", "boom", "punch", "eyes", "1", "100", "x", "foo"])
                .prop_map(str::to_string),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn strategy_equivalence(text in token_soup()) {
        let expected = reference_decode(&text);
        prop_assert_eq!(GRAMMAR.decode(&text), expected.clone());
        prop_assert_eq!(REGISTRY.decode(&text), expected);
    }

    #[test]
    fn strategy_equivalence_any_text(text in "\\PC{0,120}") {
        prop_assert_eq!(GRAMMAR.decode(&text), REGISTRY.decode(&text));
    }

    #[test]
    fn idempotent_without_tokens(text in "[^:]{0,120}") {
        prop_assert_eq!(REGISTRY.decode(&text), text);
    }

    #[test]
    fn bytes_outside_resolved_spans_are_kept(text in token_soup()) {
        let decoded = REGISTRY.decode(&text);

        // Rebuilt from grammar spans and a linear entry search alone.
        let mut rebuilt = String::new();
        let mut spans = Vec::new();
        let mut last = 0;
        for caps in TOKEN_RE.captures_iter(&text) {
            let (Some(token), Some(alias)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(emoji) = ENTRIES.iter().find(|e| e.has_alias(alias.as_str())) else {
                continue;
            };
            prop_assert_eq!(token.start() + 1, alias.start());
            prop_assert_eq!(token.end() - 1, alias.end());
            spans.push(token.range());
            rebuilt.push_str(&text[last..token.start()]);
            rebuilt.push_str(emoji.value());
            last = token.end();
        }
        rebuilt.push_str(&text[last..]);
        prop_assert_eq!(decoded, rebuilt);

        let resolved = REGISTRY
            .resolved_spans(&text)
            .map(|(span, _)| span)
            .collect::<Vec<_>>();
        prop_assert_eq!(resolved, spans);
    }
}
