//! Android resource name sanitization

use std::path::Path;

/// Fallback asset name when nothing survives sanitization
const FALLBACK_NAME: &str = "image";

/// Cleans a filename stem into an Android-resource-safe identifier:
/// lowercase, alphanumeric and underscores only, no leading/trailing or
/// repeated underscores, `img_` prefix when the result starts with a digit.
///
/// Total and idempotent; an all-invalid input yields `"image"`.
pub fn sanitize_stem(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());

    for c in raw.chars() {
        let c = c.to_ascii_lowercase();
        let mapped = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '_'
        };
        // collapse runs of '_' as they form
        if mapped != '_' || !cleaned.ends_with('_') {
            cleaned.push(mapped);
        }
    }

    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("img_{cleaned}")
    } else {
        cleaned.to_string()
    }
}

/// Returns the extension (with leading dot) the generated assets should
/// carry. The source extension is kept, lowercased, when it is one Android
/// accepts for drawables; anything else falls back to `.png`.
pub fn output_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => ".png",
        Some("jpg") => ".jpg",
        Some("jpeg") => ".jpeg",
        Some("webp") => ".webp",
        _ => ".png",
    }
}

/// Final file name for every generated density variant of `path`
pub fn asset_file_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    format!("{}{}", sanitize_stem(stem), output_extension(path))
}
