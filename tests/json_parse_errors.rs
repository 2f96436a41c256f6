//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by whisper parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_truncation() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let truncated_err = parse::from_str::<Value>(r#"{"type":"whisper_received""#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&truncated_err),
        ParseFailureCategory::Truncated
    );
}

#[test]
fn category_mapping_handles_numeric_and_depth_errors() {
    let number_err = parse::from_str::<Value>(r#"{"n":1e400}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&number_err),
        ParseFailureCategory::NumericRange
    );

    let depth = 512usize;
    let mut payload = String::with_capacity(depth * 2 + 1);
    for _ in 0..depth {
        payload.push('[');
    }
    payload.push('0');
    for _ in 0..depth {
        payload.push(']');
    }
    let depth_err = parse::from_str::<Value>(&payload).unwrap_err();
    assert_eq!(
        parse::categorize_error(&depth_err),
        ParseFailureCategory::DepthLimit
    );
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Value>(r#"{"body":"secret words""#).unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: truncated"));
    assert!(hint.contains("context: test.context"));
    assert!(!hint.contains("secret"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
}
