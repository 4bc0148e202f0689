//! # Safe Stringification
//!
//! Converts arbitrary values into human-readable text without ever
//! panicking. The [`ToText`] capability trait models values that may or may
//! not know how to render themselves; [`as_string`] layers the fallback
//! policy on top: vacant values render empty, conversion hooks are probed in
//! order, and the runtime type name is the last resort.

use std::borrow::Cow;

use serde_json::Value;
use tracing::trace;

/// Capability of rendering a value as human-readable text.
///
/// Every method has a default, so an empty `impl ToText for MyType {}`
/// models a value *without* the conversion capability: [`as_string`] then
/// falls back to the type name. Presence of the capability is probed at
/// runtime by calling [`to_text`](Self::to_text) (primary convention) and
/// [`to_legacy_text`](Self::to_legacy_text) (secondary convention), in that
/// order.
///
/// # Examples
/// ```rust
/// use std::borrow::Cow;
/// use strkit::ToText;
///
/// struct Ticket(u32);
///
/// impl ToText for Ticket {
///     fn to_text(&self) -> Option<Cow<'_, str>> {
///         Some(Cow::Owned(format!("ticket #{}", self.0)))
///     }
/// }
///
/// assert_eq!(strkit::as_string(&Ticket(7)), "ticket #7");
/// ```
pub trait ToText {
    /// Primary conversion hook. `None` means the capability is absent.
    fn to_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Secondary conversion hook, probed only when [`to_text`](Self::to_text)
    /// yields nothing. Lets a type carry an older conversion convention
    /// alongside the primary one.
    fn to_legacy_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Whether the value counts as empty. Vacant values stringify to `""`
    /// before any conversion hook is probed.
    fn is_vacant(&self) -> bool {
        false
    }

    /// Runtime type name, the last-resort rendering.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl ToText for str {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl ToText for String {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl ToText for bool {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(if *self { "true" } else { "false" }))
    }

    fn is_vacant(&self) -> bool {
        !*self
    }
}

impl ToText for f64 {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn is_vacant(&self) -> bool {
        *self == 0.0
    }
}

// The unit value is the nearest host equivalent of "no value at all".
impl ToText for () {
    fn is_vacant(&self) -> bool {
        true
    }
}

macro_rules! impl_to_text_for_integers {
    ($($ty:ty),+ $(,)?) => {$(
        impl ToText for $ty {
            fn to_text(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Owned(self.to_string()))
            }

            fn is_vacant(&self) -> bool {
                *self == 0
            }
        }
    )+};
}

impl_to_text_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToText for Value {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("")),
            Self::Bool(flag) => flag.to_text(),
            Self::Number(number) => Some(Cow::Owned(number.to_string())),
            Self::String(text) => Some(Cow::Borrowed(text)),
            // Sequences and mappings render as a readable dump
            Self::Array(_) | Self::Object(_) => {
                serde_json::to_string_pretty(self).ok().map(Cow::Owned)
            },
        }
    }

    fn is_vacant(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !*flag,
            Self::Number(number) => number.as_f64().is_some_and(|value| value == 0.0),
            Self::String(text) => text.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Object(entries) => entries.is_empty(),
        }
    }
}

/// Converts any [`ToText`] value to a string without panicking.
///
/// Policy, in order: vacant value → empty string; the primary conversion
/// hook; the secondary hook; the runtime type name.
///
/// # Examples
/// ```rust
/// use serde_json::json;
///
/// assert_eq!(strkit::as_string(&17), "17");
/// assert_eq!(strkit::as_string(&0), "");
/// assert!(strkit::as_string(&json!([1, 2])).contains('2'));
/// ```
#[must_use]
pub fn as_string<T>(value: &T) -> String
where
    T: ToText + ?Sized,
{
    render(value, None)
}

/// Same as [`as_string`], truncated to at most `max_length` characters.
///
/// Truncation counts characters rather than bytes, so a multi-byte character
/// is kept whole or dropped, never split.
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::as_string_bounded(&42, 1), "4");
/// assert_eq!(strkit::as_string_bounded("héllo", 2), "hé");
/// ```
#[must_use]
pub fn as_string_bounded<T>(value: &T, max_length: usize) -> String
where
    T: ToText + ?Sized,
{
    render(value, Some(max_length))
}

fn render<T>(value: &T, max_length: Option<usize>) -> String
where
    T: ToText + ?Sized,
{
    if value.is_vacant() {
        return String::new();
    }

    let text = value.to_text().or_else(|| value.to_legacy_text()).unwrap_or_else(|| {
        trace!(type_label = value.type_label(), "No text conversion hook, using the type name");
        Cow::Borrowed(value.type_label())
    });

    match max_length {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.into_owned(),
    }
}
