//! # Character Sets
//!
//! Named alphabets used as sampling pools for random-string generation and as
//! building blocks for validation. Pure data: every set is an ordered
//! `&'static str`, and each combined set is the concatenation of its parts in
//! the documented order (asserted in `tests/alphabets.rs`).

/// Uppercase Latin letters `A`-`Z`.
pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase Latin letters `a`-`z`.
pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// [`ALPHA_UPPER`] followed by [`ALPHA_LOWER`].
pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decimal digits `0`-`9`.
pub const DIGITS: &str = "0123456789";

/// [`ALPHA`] followed by [`DIGITS`].
pub const ALPHA_AND_DIGITS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// [`ALPHA_UPPER`] followed by [`DIGITS`].
pub const ALPHA_UPPER_AND_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// [`ALPHA_LOWER`] followed by [`DIGITS`].
pub const ALPHA_LOWER_AND_DIGITS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Lowercase hexadecimal digits `0`-`9`, `a`-`f`.
pub const HEX_LOWER: &str = "0123456789abcdef";
