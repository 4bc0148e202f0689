//! Length tracking helper.

/// Returns the byte length of `value`, floored at `minimum_length`.
///
/// Feeding the previous result back in as `minimum_length` tracks the widest
/// string seen across a series of calls:
///
/// ```rust
/// use strkit::length_if_greater_than;
///
/// let mut widest = 0;
/// for name in ["id", "customer", "ts"] {
///     widest = length_if_greater_than(name, widest);
/// }
/// assert_eq!(widest, 8);
/// ```
#[must_use]
pub fn length_if_greater_than(value: &str, minimum_length: usize) -> usize {
    value.len().max(minimum_length)
}
