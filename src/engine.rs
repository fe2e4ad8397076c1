//! In-process pretokenizer engines behind the [`Engine`] trait boundary.
//!
//! The trait is the seam between the bridge surface in [`crate::runtime`]
//! and whatever actually performs the splitting. Both engines here are
//! immutable once built, so a shared reference can serve any number of
//! calls.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ByteLevelConfig, DecodePolicy};
use crate::constants::{WHITESPACE_SPLIT_PATTERN, WORD_SPLIT_PATTERN};
use crate::error::{PretokError, Result};
use crate::mapping::{byte_to_char, char_to_byte};

static WORD_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WORD_SPLIT_PATTERN).expect("word split pattern must compile")
});

static WHITESPACE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WHITESPACE_SPLIT_PATTERN).expect("whitespace split pattern must compile")
});

/// Contract every pretokenizer engine satisfies.
///
/// `pretokenize` produces an ordered word sequence; `decode` reassembles one
/// back into text where the engine supports it. Engines report failures
/// through [`PretokError`] and never panic on caller input.
pub(crate) trait Engine: Send + Sync {
    /// Splits `text` into an ordered word sequence.
    fn pretokenize(&self, text: &str) -> Result<Vec<String>>;
    /// Reassembles a word sequence into text, where the engine supports it.
    fn decode(&self, words: &[String]) -> Result<String>;
}

/// Splits `text` into regex matches plus the gaps between them, covering the
/// input exactly and in order.
fn split_contiguous<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut last_end = 0;
    for found in pattern.find_iter(text) {
        if last_end < found.start() {
            pieces.push(&text[last_end..found.start()]);
        }
        pieces.push(found.as_str());
        last_end = found.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }
    pieces
}

/// Byte-level engine: word split followed by the byte-to-alphabet remap.
pub(crate) struct ByteLevelEngine {
    add_prefix_space: bool,
    decode_policy: DecodePolicy,
}

impl ByteLevelEngine {
    pub(crate) fn new(config: ByteLevelConfig) -> Self {
        Self {
            add_prefix_space: config.add_prefix_space,
            decode_policy: config.decode_policy,
        }
    }

    fn remap(piece: &str) -> String {
        piece.bytes().map(byte_to_char).collect()
    }
}

impl Engine for ByteLevelEngine {
    fn pretokenize(&self, text: &str) -> Result<Vec<String>> {
        let text: Cow<'_, str> = if self.add_prefix_space
            && !text.is_empty()
            && !text.starts_with(' ')
        {
            Cow::Owned(format!(" {text}"))
        } else {
            Cow::Borrowed(text)
        };

        Ok(split_contiguous(&WORD_SPLIT, &text)
            .into_iter()
            .map(Self::remap)
            .collect())
    }

    fn decode(&self, words: &[String]) -> Result<String> {
        let mut bytes = Vec::with_capacity(words.iter().map(|word| word.len()).sum());
        for word in words {
            for ch in word.chars() {
                match char_to_byte(ch) {
                    Some(byte) => bytes.push(byte),
                    None => match self.decode_policy {
                        DecodePolicy::Strict => {
                            return Err(PretokError::Decoding(format!(
                                "character {ch:?} is outside the byte-level alphabet"
                            )));
                        }
                        DecodePolicy::Lossy => {
                            bytes.extend_from_slice("\u{FFFD}".as_bytes());
                        }
                    },
                }
            }
        }

        match self.decode_policy {
            DecodePolicy::Strict => String::from_utf8(bytes).map_err(|error| {
                PretokError::Decoding(format!("decoded bytes are not valid UTF-8: {error}"))
            }),
            DecodePolicy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

/// Whitespace engine: word and punctuation runs, whitespace dropped.
///
/// Dropping whitespace makes the split irreversible, so decoding is refused;
/// the public wrapper does not expose a decode method at all.
pub(crate) struct WhitespaceEngine;

impl Engine for WhitespaceEngine {
    fn pretokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(WHITESPACE_SPLIT
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect())
    }

    fn decode(&self, _words: &[String]) -> Result<String> {
        Err(PretokError::Decoding(
            "whitespace pretokenization is not reversible".to_string(),
        ))
    }
}
