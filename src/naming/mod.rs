//! Naming rules for stored results.
//!
//! Every submission becomes one file under `results/`, named after the
//! request instant and a filesystem-safe form of the submitter.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Directory results are written to inside the repository.
pub const RESULTS_DIR: &str = "results";

/// Identifier used when neither a username nor a `uid` is supplied.
pub const ANONYMOUS: &str = "anonymous";

/// Resolve who a submission belongs to.
///
/// Prefers the explicit `username`, then `result.uid`, then [`ANONYMOUS`].
/// Empty strings and a `uid` of `0` are skipped. Other numeric `uid`s are
/// used in their decimal form.
pub fn resolve_identifier(username: Option<&str>, result: &Value) -> String {
    if let Some(name) = username.filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    match result.get("uid") {
        Some(Value::String(uid)) if !uid.is_empty() => uid.clone(),
        Some(Value::Number(uid)) if uid.as_f64() != Some(0.0) => uid.to_string(),
        _ => ANONYMOUS.to_string(),
    }
}

/// Replace every character outside `[A-Za-z0-9_-]` with underscores.
///
/// One underscore per UTF-16 code unit, so characters outside the Basic
/// Multilingual Plane (emoji) become two.
pub fn sanitize_segment(identifier: &str) -> String {
    let mut segment = String::with_capacity(identifier.len());
    for c in identifier.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            segment.push(c);
        } else {
            segment.extend(std::iter::repeat('_').take(c.len_utf16()));
        }
    }
    segment
}

/// ISO-8601 UTC instant with millisecond precision, `:` and `.` turned into `-`.
///
/// `2025-12-21T12:34:56.789Z` becomes `2025-12-21T12-34-56-789Z`.
pub fn timestamp_segment(instant: DateTime<Utc>) -> String {
    instant
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Repository path for a result submitted at `instant` by `identifier`.
pub fn result_path(instant: DateTime<Utc>, identifier: &str) -> String {
    format!(
        "{RESULTS_DIR}/{}_{}.json",
        timestamp_segment(instant),
        sanitize_segment(identifier)
    )
}

pub fn commit_message(identifier: &str, timestamp: &str) -> String {
    format!("Add quiz result for {identifier} at {timestamp}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 21, 12, 34, 56).unwrap()
            + chrono::Duration::milliseconds(789)
    }

    #[test]
    fn test_username_wins_over_uid() {
        let result = json!({ "uid": "abc" });
        assert_eq!(resolve_identifier(Some("kim"), &result), "kim");
    }

    #[test]
    fn test_uid_used_without_username() {
        assert_eq!(resolve_identifier(None, &json!({ "uid": "abc" })), "abc");
    }

    #[test]
    fn test_empty_username_falls_back_to_uid() {
        assert_eq!(resolve_identifier(Some(""), &json!({ "uid": "abc" })), "abc");
    }

    #[test]
    fn test_numeric_uid() {
        assert_eq!(resolve_identifier(None, &json!({ "uid": 42 })), "42");
    }

    #[test]
    fn test_zero_uid_is_anonymous() {
        assert_eq!(resolve_identifier(None, &json!({ "uid": 0 })), ANONYMOUS);
        assert_eq!(resolve_identifier(None, &json!({ "uid": 0.0 })), ANONYMOUS);
        assert_eq!(resolve_identifier(None, &json!({ "uid": "0" })), "0");
    }

    #[test]
    fn test_anonymous_fallback() {
        assert_eq!(resolve_identifier(None, &json!({ "score": 3 })), ANONYMOUS);
        assert_eq!(resolve_identifier(None, &json!({ "uid": "" })), ANONYMOUS);
        assert_eq!(resolve_identifier(None, &json!({ "uid": null })), ANONYMOUS);
        assert_eq!(resolve_identifier(None, &json!([1, 2])), ANONYMOUS);
    }

    #[test]
    fn test_sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_segment("Bo@rt!"), "Bo_rt_");
        assert_eq!(sanitize_segment("a-b_C9"), "a-b_C9");
        assert_eq!(sanitize_segment("../etc/passwd"), "___etc_passwd");
        assert_eq!(sanitize_segment("José"), "Jos_");
        assert_eq!(sanitize_segment("a😀b"), "a__b");
    }

    #[test]
    fn test_timestamp_segment_has_no_colons_or_dots() {
        assert_eq!(timestamp_segment(instant()), "2025-12-21T12-34-56-789Z");
    }

    #[test]
    fn test_timestamp_keeps_zero_milliseconds() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(timestamp_segment(instant), "2025-01-15T08-00-00-000Z");
    }

    #[test]
    fn test_result_path() {
        assert_eq!(
            result_path(instant(), "Bo@rt!"),
            "results/2025-12-21T12-34-56-789Z_Bo_rt_.json"
        );
    }

    #[test]
    fn test_commit_message_uses_raw_identifier() {
        assert_eq!(
            commit_message("Bo@rt!", "2025-12-21T12-34-56-789Z"),
            "Add quiz result for Bo@rt! at 2025-12-21T12-34-56-789Z"
        );
    }
}
