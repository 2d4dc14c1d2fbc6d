//! Lenient query-string coercion shared by the HTTP handlers.

use crate::domain::foundation::LooseValue;

/// Parses an optional integer parameter. Blank or non-numeric input is absent.
pub fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| LooseValue::Text(s.to_string()).as_i64())
}

/// Trims an optional text parameter. Blank input is absent.
pub fn trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
