//! Bijective mapping between raw bytes and the byte-level alphabet.
//!
//! Every byte value maps to a distinct printable character so that arbitrary
//! byte sequences, not just valid text, survive pretokenization losslessly.
//! Printable latin ranges keep their own code point; the remaining 68 bytes
//! are relocated to `U+0100 + n` in order.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

fn is_printable(byte: u8) -> bool {
    matches!(byte, b'!'..=b'~' | 0xA1..=0xAC | 0xAE..=0xFF)
}

fn build_byte_to_char() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut relocated = 0u32;
    for byte in 0..=255u8 {
        let code_point = if is_printable(byte) {
            byte as u32
        } else {
            let code_point = 0x100 + relocated;
            relocated += 1;
            code_point
        };
        // Every code point here is below 0x200, always a valid scalar value.
        table[byte as usize] = char::from_u32(code_point).unwrap_or('\0');
    }
    table
}

static BYTE_TO_CHAR: LazyLock<[char; 256]> = LazyLock::new(build_byte_to_char);

static CHAR_TO_BYTE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    BYTE_TO_CHAR
        .iter()
        .enumerate()
        .map(|(byte, ch)| (*ch, byte as u8))
        .collect()
});

/// Maps a raw byte to its byte-level alphabet character.
pub fn byte_to_char(byte: u8) -> char {
    BYTE_TO_CHAR[byte as usize]
}

/// Maps a byte-level alphabet character back to its raw byte.
///
/// Returns `None` for characters outside the alphabet, i.e. for word
/// sequences that were not produced by a byte-level pretokenizer.
pub fn char_to_byte(ch: char) -> Option<u8> {
    CHAR_TO_BYTE.get(&ch).copied()
}

/// Returns the full 256-character byte-level alphabet in code point order.
pub fn alphabet() -> BTreeSet<char> {
    BYTE_TO_CHAR.iter().copied().collect()
}
