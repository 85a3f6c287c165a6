//! Pattern module - Bare object literal detection
//!
//! Data bindings are often written without their enclosing braces
//! (`:data="item: item, index: idx"`). Such text must be wrapped before it
//! reaches the output template, while expressions and already braced
//! literals are left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Matches text that starts like the body of an object literal: an
/// identifier or quoted key followed by a colon.
pub static PLAIN_OBJECT_REGEXP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:[\w$]+|'[^']*'|"[^"]*")\s*:"#).unwrap()
});

/// Check if text looks like an object literal body without braces
pub fn is_plain_object(text: &str) -> bool {
    PLAIN_OBJECT_REGEXP.is_match(text)
}

/// Trim a data expression and wrap it in braces when it is a bare object body
pub fn normalize_data_expr(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_plain_object(trimmed) {
        format!("{{{}}}", trimmed)
    } else {
        trimmed.to_string()
    }
}
