//! # Base Conversion
//!
//! Chunk-local hexadecimal to base-36 conversion. This is deliberately not a
//! big-integer conversion of the whole input: each 4-character chunk is
//! converted on its own, which keeps outputs short and stable for identifier
//! shortening at the cost of positional meaning.

use tracing::trace;

const CHUNK_LEN: usize = 4;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Converts a hexadecimal string to base 36, 4 characters at a time.
///
/// Each full 4-character chunk is converted independently and the results
/// are concatenated; a trailing chunk shorter than 4 characters is dropped.
/// The output is therefore not the base-36 form of the input read as one
/// number. An input consisting only of a short chunk yields `Some("")`.
///
/// Returns `None` for empty input or when any full chunk is not valid
/// hexadecimal (either case accepted).
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::hex_to_base36("ffff").as_deref(), Some("1ekf"));
/// assert_eq!(strkit::hex_to_base36("0000ffff").as_deref(), Some("01ekf"));
/// assert_eq!(strkit::hex_to_base36(""), None);
/// assert_eq!(strkit::hex_to_base36("zzzz"), None);
/// ```
#[must_use]
pub fn hex_to_base36(hex: &str) -> Option<String> {
    if hex.is_empty() {
        return None;
    }

    let chunks = hex.as_bytes().chunks_exact(CHUNK_LEN);
    let dropped = chunks.remainder();
    if !dropped.is_empty() {
        trace!(dropped = dropped.len(), "Trailing short chunk dropped");
    }

    let mut result = String::with_capacity(hex.len());
    for chunk in chunks {
        let Some(value) = parse_hex_chunk(chunk) else {
            trace!(?chunk, "Invalid hex chunk, conversion aborted");
            return None;
        };
        result.push_str(&encode_base36(value));
    }
    Some(result)
}

fn parse_hex_chunk(chunk: &[u8]) -> Option<u32> {
    if !chunk.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    // All-hexdigit bytes are valid UTF-8 and carry no sign, so this cannot fail
    let text = std::str::from_utf8(chunk).ok()?;
    u32::from_str_radix(text, 16).ok()
}

fn encode_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    // A full chunk is at most 0xFFFF, four base-36 digits
    let mut digits = [0_u8; 8];
    let mut len = 0;
    while value > 0 {
        digits[len] = BASE36_DIGITS[(value % 36) as usize];
        len += 1;
        value /= 36;
    }
    digits[..len].iter().rev().map(|&byte| char::from(byte)).collect()
}
