use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

/// An upload filename reduced to `[A-Za-z0-9_.-]` with no path components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedFilename(String);

impl SanitizedFilename {
    /// Returns `None` when nothing usable remains after sanitizing.
    pub fn new(raw: &str) -> Option<Self> {
        let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
        let flattened = ascii.replace(['/', '\\'], " ");
        let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

        let kept: String = joined
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
            .collect();
        let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

        if trimmed.is_empty() {
            return None;
        }

        let stem = trimmed.split('.').next().unwrap_or_default();
        if WINDOWS_DEVICE_NAMES.contains(&stem.to_ascii_uppercase().as_str()) {
            return Some(Self(format!("_{}", trimmed)));
        }

        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text after the last `.`, upper-cased; the whole name when there is no `.`.
    pub fn format(&self) -> String {
        self.0
            .rsplit('.')
            .next()
            .unwrap_or(&self.0)
            .to_uppercase()
    }
}

impl fmt::Display for SanitizedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary of a stored 3D asset as reported back to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetFeatures {
    pub filename: String,
    pub size: u64,
    pub format: String,
    pub path: String,
}
