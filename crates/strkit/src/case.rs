//! # Camel Case
//!
//! Capital-camel-case conversion for identifier-style input such as
//! `my_field.name`.

use tracing::trace;

/// Characters the input is split on by default.
const DEFAULT_SPLIT_CHARS: &[char] = &['.', '_'];

/// Converts `value` to capital camel case, splitting on `.` and `_`.
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::to_capital_camel_case("my_field_name").as_deref(), Some("MyFieldName"));
/// assert_eq!(strkit::to_capital_camel_case(""), None);
/// ```
#[must_use]
pub fn to_capital_camel_case(value: &str) -> Option<String> {
    to_capital_camel_case_on(value, DEFAULT_SPLIT_CHARS)
}

/// Converts `value` to capital camel case, splitting on `split_on`.
///
/// The split characters apply one after another: the string is split on the
/// first character, empty segments are dropped, segments longer than one
/// character get their first letter capitalized, the segments are joined
/// back together, and the next split character starts over on the joined
/// result. Single-character segments keep their case until the final step,
/// which always capitalizes the first letter of the result.
///
/// Returns `None` for empty input or when a round of splitting leaves no
/// segments at all (input made up of split characters only).
///
/// # Examples
/// ```rust
/// use strkit::to_capital_camel_case_on;
///
/// assert_eq!(to_capital_camel_case_on("api.base_url", &['.', '_']).as_deref(), Some("ApiBaseUrl"));
/// assert_eq!(to_capital_camel_case_on("a", &[]).as_deref(), Some("A"));
/// assert_eq!(to_capital_camel_case_on("...", &['.', '_']), None);
/// ```
#[must_use]
pub fn to_capital_camel_case_on(value: &str, split_on: &[char]) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let mut joined = value.to_owned();
    for &split_char in split_on {
        let segments: Vec<&str> =
            joined.split(split_char).filter(|segment| !segment.is_empty()).collect();
        if segments.is_empty() {
            trace!(input = value, "Splitting left no segments");
            return None;
        }
        joined = segments
            .iter()
            .map(|segment| {
                if segment.chars().count() > 1 {
                    capitalize_first(segment)
                } else {
                    (*segment).to_owned()
                }
            })
            .collect();
    }

    Some(capitalize_first(&joined))
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_characters() {
        assert_eq!(to_capital_camel_case("my_field_name").as_deref(), Some("MyFieldName"));
        assert_eq!(to_capital_camel_case("api.base_url").as_deref(), Some("ApiBaseUrl"));
        assert_eq!(to_capital_camel_case("plain").as_deref(), Some("Plain"));
    }

    #[test]
    fn test_single_character_segments_keep_their_case() {
        // only the final capitalization touches one-character segments
        assert_eq!(to_capital_camel_case("x_ray").as_deref(), Some("XRay"));
        assert_eq!(to_capital_camel_case("a_b_c").as_deref(), Some("Abc"));
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert_eq!(to_capital_camel_case(""), None);
        assert_eq!(to_capital_camel_case("..."), None);
        assert_eq!(to_capital_camel_case("___"), None);
    }

    #[test]
    fn test_custom_split_characters() {
        assert_eq!(to_capital_camel_case_on("a-b-c", &['-']).as_deref(), Some("Abc"));
        assert_eq!(to_capital_camel_case_on("hello-world", &['-']).as_deref(), Some("HelloWorld"));
        assert_eq!(to_capital_camel_case_on("a", &[]).as_deref(), Some("A"));
    }

    #[test]
    fn test_first_letter_capitalization_handles_unicode() {
        assert_eq!(to_capital_camel_case("über_mensch").as_deref(), Some("ÜberMensch"));
    }
}
