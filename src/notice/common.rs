//! Common utilities for notice generation.
//!
//! Shared helpers for date defaults and HTML escaping.

use chrono::Local;

/// Base name shared by the rendered HTML and the exported PDF.
pub const NOTICE_FILE_STEM: &str = "eviction_notice";

/// Download name offered to the user.
pub const PDF_FILENAME: &str = "eviction_notice.pdf";

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Current local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
