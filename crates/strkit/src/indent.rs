//! # Newline Padding
//!
//! Indents the continuation lines of multi-line text by inserting a pad
//! after every newline. Input is anything stringifiable per
//! [`as_string`](crate::as_string), so structured values can be passed
//! directly.

use crate::stringify::{ToText, as_string};

/// Inserts `tab_count` tab characters after every newline of the stringified
/// `value`.
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::tab_pad_new_lines("a\nb", 2), "a\n\t\tb");
/// ```
#[must_use]
pub fn tab_pad_new_lines<T>(value: &T, tab_count: usize) -> String
where
    T: ToText + ?Sized,
{
    pad_new_lines_with(value, tab_count, '\t')
}

/// Inserts `repetitions` spaces after every newline of the stringified
/// `value`.
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::pad_new_lines("a\nb", 2), "a\n  b");
/// ```
#[must_use]
pub fn pad_new_lines<T>(value: &T, repetitions: usize) -> String
where
    T: ToText + ?Sized,
{
    pad_new_lines_with(value, repetitions, ' ')
}

/// Inserts `repetitions` copies of `pad_char` after every newline of the
/// stringified `value`.
///
/// Only `'\n'` triggers padding; a `"\r\n"` sequence is padded after the
/// `'\n'`.
#[must_use]
pub fn pad_new_lines_with<T>(value: &T, repetitions: usize, pad_char: char) -> String
where
    T: ToText + ?Sized,
{
    let text = as_string(value);
    if repetitions == 0 || !text.contains('\n') {
        return text;
    }

    let mut replacement = String::with_capacity(1 + repetitions * pad_char.len_utf8());
    replacement.push('\n');
    for _ in 0..repetitions {
        replacement.push(pad_char);
    }
    text.replace('\n', &replacement)
}
