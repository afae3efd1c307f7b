mod country_codes;
mod types;

pub use country_codes::{expand_country_codes, lookup_country_code};
pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// Leading identifier: "123_CH_report.pdf" -> "123"
static LEADING_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+").unwrap());

// Country codes: any two consecutive uppercase ASCII letters, extension included
static COUNTRY_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{2}").unwrap());

// Style tag: "StyleA", "styleb", "STYLEC", ...
static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)style[a-z]").unwrap());

/// Extract the leading id, locale tokens and style tag from a filename
pub fn parse_filename(name: &str) -> FilenameTokens {
    let leading_id = extract_leading_id(name);
    let codes = extract_country_codes(name);
    let locales = expand_country_codes(codes.iter().copied());
    let style = extract_style(name);

    trace!(
        name = %name,
        leading_id = %leading_id,
        codes = ?codes,
        locales = ?locales,
        style = ?style,
        "Parsed filename"
    );

    FilenameTokens {
        leading_id,
        locales,
        style,
        original_name: name.to_string(),
    }
}

/// Leading run of digits, or `"unknown"` when the name does not start with one
pub fn extract_leading_id(name: &str) -> String {
    LEADING_ID_REGEX
        .find(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_ID.to_string())
}

/// All non-overlapping two-letter uppercase matches, leftmost first
pub fn extract_country_codes(name: &str) -> Vec<&str> {
    COUNTRY_CODE_REGEX
        .find_iter(name)
        .map(|m| m.as_str())
        .collect()
}

/// First style tag in the name, matched case-insensitively
pub fn extract_style(name: &str) -> Option<String> {
    STYLE_REGEX.find(name).map(|m| m.as_str().to_string())
}
