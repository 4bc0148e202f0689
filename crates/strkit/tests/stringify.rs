use std::borrow::Cow;

use serde_json::json;
use strkit::{ToText, as_string, as_string_bounded};

struct Ticket {
    id: u32,
}

impl ToText for Ticket {
    fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!("ticket #{}", self.id)))
    }
}

struct LegacyOnly;

impl ToText for LegacyOnly {
    fn to_legacy_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("legacy rendering"))
    }
}

struct NoCapability;

impl ToText for NoCapability {}

#[test]
fn probes_the_primary_hook_first() {
    assert_eq!(as_string(&Ticket { id: 7 }), "ticket #7");
}

#[test]
fn falls_back_to_the_secondary_hook() {
    assert_eq!(as_string(&LegacyOnly), "legacy rendering");
}

#[test]
fn renders_the_type_name_when_no_hook_exists() {
    assert!(as_string(&NoCapability).contains("NoCapability"));
}

#[test]
fn vacant_values_render_empty_before_any_hook() {
    assert_eq!(as_string(&serde_json::Value::Null), "");
    assert_eq!(as_string(&()), "");
    assert_eq!(as_string(&json!(0)), "");
    assert_eq!(as_string(&json!("")), "");
}

#[test]
fn structured_values_render_a_readable_dump() {
    let dump = as_string(&json!({ "name": "strkit", "tags": ["a", "b"] }));
    assert!(dump.contains("name"));
    assert!(dump.contains("strkit"));
    assert!(dump.lines().count() > 1, "pretty dump spans multiple lines");
}

#[test]
fn bounded_variant_truncates_by_characters() {
    assert_eq!(as_string_bounded(&Ticket { id: 42 }, 6), "ticket");
    assert_eq!(as_string_bounded(&42, 1), "4");
    assert_eq!(as_string_bounded("héllo wörld", 4), "héll");
}

#[test]
fn never_panics_for_deeply_nested_values() {
    let mut value = json!(1);
    for _ in 0..32 {
        value = json!([value]);
    }
    assert!(!as_string(&value).is_empty());
}
