//! Configuration for the byte-level pretokenizer.

/// Policy applied when `decode` receives a word sequence that was not
/// produced by a matching `pretokenize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail with a decoding error on characters outside the byte-level
    /// alphabet or on byte output that is not valid UTF-8.
    #[default]
    Strict,
    /// Substitute U+FFFD for anything unconvertible; never fails.
    Lossy,
}

/// Configuration accepted by `ByteLevelPretokenizer::from_config`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteLevelConfig {
    /// Prepends one space to non-empty input before splitting, so a leading
    /// word gets the same space-prefixed shape as every other word. Off by
    /// default: with it enabled, decoding pretokenizer output returns the
    /// input with that extra leading space.
    pub add_prefix_space: bool,
    /// Decode behavior on words the pretokenizer never produced.
    pub decode_policy: DecodePolicy,
}

impl ByteLevelConfig {
    /// Sets whether a space is prepended to non-empty input before splitting.
    pub fn with_add_prefix_space(mut self, add_prefix_space: bool) -> Self {
        self.add_prefix_space = add_prefix_space;
        self
    }

    /// Sets the decode behavior for words the pretokenizer never produced.
    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }
}
