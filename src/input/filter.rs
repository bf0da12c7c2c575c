//! Privileged key predicate
//!
//! An event is privileged when it carries Ctrl, Alt or Meta, or when its key
//! identifier contains `F` followed by digits anywhere (case-insensitive).
//! The function-key pattern is deliberately unanchored: `"xF1y"` matches the
//! same as `"F1"`. Tightening it would change which events reach the page.

use std::sync::LazyLock;

use regex::Regex;

use super::event::KeyEvent;

/// Unanchored, case-insensitive function-key pattern
pub const FUNCTION_KEY_PATTERN: &str = r"(?i)F\d+";

static FUNCTION_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FUNCTION_KEY_PATTERN).expect("function key pattern is valid")
});

/// Does the key identifier look like a function key?
pub fn is_function_key(key: &str) -> bool {
    FUNCTION_KEY.is_match(key)
}

/// Should this event be withheld from every other listener on the page?
pub fn is_privileged(event: &KeyEvent) -> bool {
    event.has_modifier() || is_function_key(&event.key)
}
