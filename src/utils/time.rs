use chrono::{SecondsFormat, Utc};

/// ISO-8601 with millisecond precision and a `Z` suffix, the format stamped
/// into `createdAt`.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
