//! Constants shared by the handle lifecycle and the byte-level engines.

/// Handle value carried by an instance before allocation succeeds and after
/// release. Valid handles are always `>= 0`.
pub const HANDLE_SENTINEL: i64 = -1;

/// Default maximum number of live engine instances in the registry.
pub const DEFAULT_MAX_INSTANCES: usize = 1024;

/// Environment variable overriding [`DEFAULT_MAX_INSTANCES`].
///
/// Must parse as a non-negative integer; allocation rejects anything else.
/// Mainly useful for exercising allocation-failure paths; set it to `0` to
/// make every allocation fail.
pub const PRETOK_MAX_INSTANCES_ENV: &str = "PRETOK_MAX_INSTANCES";

/// Word split pattern used by the byte-level engine.
///
/// English contractions, optionally space-prefixed letter runs, digit runs
/// and punctuation runs, then whitespace runs. The upstream GPT-2 pattern
/// splits a trailing-whitespace run with a negative look-ahead; the `regex`
/// crate supports no look-around, so whitespace runs stay whole here. Pieces
/// still cover the input exactly, which is what decoding relies on.
pub const WORD_SPLIT_PATTERN: &str =
    r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+";

/// Word split pattern used by the whitespace engine: word runs and
/// punctuation runs, whitespace removed.
pub const WHITESPACE_SPLIT_PATTERN: &str = r"\w+|[^\w\s]+";
