use std::str;
use std::sync::Arc;

use crate::config::ByteLevelConfig;
use crate::constants::HANDLE_SENTINEL;
use crate::engine::{ByteLevelEngine, Engine, WhitespaceEngine};
use crate::error::{PretokError, Result};
use crate::registry::{self, RawHandle};

fn decode_input_bytes(bytes: &[u8]) -> Result<&str> {
    str::from_utf8(bytes).map_err(|error| {
        PretokError::Decoding(format!("input is not valid UTF-8: {error}"))
    })
}

/// Byte-level pretokenizer bound to one engine instance.
///
/// Construction allocates the engine resource; dropping the value releases
/// it exactly once. The type is move-only, so the handle cannot be used
/// after release or released twice.
///
/// Calls are synchronous and atomic. The instance carries no interior
/// mutability, but callers sharing one instance across threads should
/// serialize access; per-call engine state is thread-confined.
///
/// ```
/// use pretok_rs::ByteLevelPretokenizer;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pretok = ByteLevelPretokenizer::new()?;
///     let words = pretok.pretokenize("Hello world")?;
///     assert_eq!(pretok.decode(&words)?, "Hello world");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ByteLevelPretokenizer {
    handle: RawHandle,
}

impl ByteLevelPretokenizer {
    /// Allocates a byte-level engine with default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(ByteLevelConfig::default())
    }

    /// Allocates a byte-level engine with the provided configuration.
    pub fn from_config(config: ByteLevelConfig) -> Result<Self> {
        let engine: Arc<dyn Engine> = Arc::new(ByteLevelEngine::new(config));
        let handle = registry::allocate(engine)?;
        Ok(Self { handle })
    }

    /// Splits `text` into an ordered sequence of byte-level word pieces.
    ///
    /// Concatenated in order, the pieces cover every byte of the input, so
    /// [`Self::decode`] can reconstruct it exactly. Empty input produces an
    /// empty sequence.
    pub fn pretokenize(&self, text: &str) -> Result<Vec<String>> {
        registry::engine_for(self.handle)?.pretokenize(text)
    }

    /// Like [`Self::pretokenize`], but accepts raw bytes and fails with a
    /// decoding error when they are not valid UTF-8.
    pub fn pretokenize_bytes(&self, bytes: &[u8]) -> Result<Vec<String>> {
        self.pretokenize(decode_input_bytes(bytes)?)
    }

    /// Reassembles a word sequence into text, the left inverse of
    /// [`Self::pretokenize`].
    ///
    /// For sequences the pretokenizer never produced, the configured
    /// [`crate::DecodePolicy`] decides between failing and substituting
    /// U+FFFD. An empty sequence decodes to the empty string.
    pub fn decode(&self, words: &[String]) -> Result<String> {
        registry::engine_for(self.handle)?.decode(words)
    }

    /// Returns the raw registry handle backing this instance.
    pub fn raw_handle(&self) -> RawHandle {
        self.handle
    }
}

impl Drop for ByteLevelPretokenizer {
    fn drop(&mut self) {
        if self.handle == HANDLE_SENTINEL {
            return;
        }
        registry::release(self.handle);
        self.handle = HANDLE_SENTINEL;
    }
}

/// Whitespace pretokenizer bound to one engine instance.
///
/// Splits text into word and punctuation runs, discarding whitespace. The
/// discarded whitespace makes the split irreversible, so no decode method
/// exists on this type.
#[derive(Debug)]
pub struct WhitespacePretokenizer {
    handle: RawHandle,
}

impl WhitespacePretokenizer {
    /// Allocates a whitespace engine.
    pub fn new() -> Result<Self> {
        let engine: Arc<dyn Engine> = Arc::new(WhitespaceEngine);
        let handle = registry::allocate(engine)?;
        Ok(Self { handle })
    }

    /// Splits `text` into word and punctuation runs.
    pub fn pretokenize(&self, text: &str) -> Result<Vec<String>> {
        registry::engine_for(self.handle)?.pretokenize(text)
    }

    /// Like [`Self::pretokenize`], but accepts raw bytes and fails with a
    /// decoding error when they are not valid UTF-8.
    pub fn pretokenize_bytes(&self, bytes: &[u8]) -> Result<Vec<String>> {
        self.pretokenize(decode_input_bytes(bytes)?)
    }

    /// Returns the raw registry handle backing this instance.
    pub fn raw_handle(&self) -> RawHandle {
        self.handle
    }
}

impl Drop for WhitespacePretokenizer {
    fn drop(&mut self) {
        if self.handle == HANDLE_SENTINEL {
            return;
        }
        registry::release(self.handle);
        self.handle = HANDLE_SENTINEL;
    }
}
