/// Placeholder id used when a filename has no leading digits
pub const UNKNOWN_ID: &str = "unknown";

/// Structured tokens extracted from a single filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTokens {
    /// Leading run of digits, or `"unknown"`
    pub leading_id: String,
    /// Expanded locale tokens, in order of first occurrence, without duplicates
    pub locales: Vec<String>,
    /// First `Style<letter>` match, original casing kept
    pub style: Option<String>,
    pub original_name: String,
}

impl FilenameTokens {
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }
}
