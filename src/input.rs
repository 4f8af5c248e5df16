//! Raw text input helpers for interactive callers.

/// Split comma-separated text into trimmed, non-empty phrases
pub fn split_phrases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim and lowercase a crop name for catalog lookup
pub fn normalize_crop(raw: &str) -> String {
    raw.trim().to_lowercase()
}
