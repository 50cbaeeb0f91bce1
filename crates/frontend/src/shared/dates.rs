//! Date display helpers. The backend transports timestamps as RFC 3339
//! strings and plain `yyyy-mm-dd` dates; both render as "02 July, 2025".

use chrono::{DateTime, NaiveDate};

pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d %B, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d %B, %Y").to_string();
    }
    trimmed.to_string()
}

/// Current instant as an RFC 3339 string, for fresh `updatedAt` stamps.
/// Uses the JS clock; chrono stays parse/format-only on wasm.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_date("2025-07-02T08:30:00.000Z"), "02 July, 2025");
    }

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date("2024-12-31"), "31 December, 2024");
    }

    #[test]
    fn test_blank_renders_na() {
        assert_eq!(format_date("  "), "N/A");
    }

    #[test]
    fn test_unparsable_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
