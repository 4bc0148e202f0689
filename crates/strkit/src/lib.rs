//! # String Tools
//!
//! Stateless helpers for everyday string chores: newline padding, prefix and
//! suffix handling, capital-camel-case conversion, random strings, chunked
//! hex-to-base36 conversion, and panic-free stringification of arbitrary
//! values. Every function takes its input by reference and returns a new
//! value; nothing here holds state across calls.
//!
//! ## Random strings
//! ```rust
//! let token = strkit::random_string(12);
//! assert_eq!(token.len(), 12);
//! ```
//!
//! ## Stringification
//! Anything implementing [`ToText`] converts without panicking, whatever its
//! shape:
//! ```rust
//! use serde_json::json;
//!
//! assert_eq!(strkit::as_string(&json!(42)), "42");
//! assert_eq!(strkit::as_string(&serde_json::Value::Null), "");
//! ```

pub mod affix;
pub mod case;
pub mod indent;
pub mod length;
pub mod radix;
pub mod random;
pub mod stringify;

pub use strkit_charset as charset;

pub use affix::{ends_with, ensure_begins_with, ensure_ends_with, remove_trailing, starts_with};
pub use case::{to_capital_camel_case, to_capital_camel_case_on};
pub use indent::{pad_new_lines, pad_new_lines_with, tab_pad_new_lines};
pub use length::length_if_greater_than;
pub use radix::hex_to_base36;
pub use random::{random_string, random_string_from};
pub use stringify::{ToText, as_string, as_string_bounded};
