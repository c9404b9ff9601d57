//! Language detection from locale file paths.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Language codes shipped by CKEditor-family locale packs.
static LANGUAGE_CODES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "af", "ar", "az", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "de-ch", "el", "en",
        "en-au", "en-ca", "en-gb", "eo", "es", "es-mx", "et", "eu", "fa", "fi", "fo", "fr",
        "fr-ca", "gl", "gu", "he", "hi", "hr", "hu", "id", "is", "it", "ja", "ka", "km", "ko",
        "ku", "lt", "lv", "mk", "mn", "ms", "nb", "nl", "no", "oc", "pl", "pt", "pt-br", "ro",
        "ru", "si", "sk", "sl", "sq", "sr", "sr-latn", "sv", "th", "tr", "tt", "ug", "uk", "vi",
        "zh", "zh-cn",
    ]
    .iter()
    .map(|code| (*code).to_string())
    .collect()
});

/// Normalizes a language code for comparison (lowercase, `-` for `_`).
fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('_', "-")
}

/// Detects the bundle language from a locale file path.
///
/// Splits the path on `/` and `.`, then searches backwards for a part that
/// matches a known language code. The match is returned in normalized form
/// so catalogs key bundles consistently.
///
/// # Examples
/// - `locales/eo.json` → `eo`
/// - `lang/pt-br.json` → `pt-br`
/// - `translations/PT_BR/editor.json` → `pt-br`
///
/// Returns `"unknown"` when no part matches.
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> String {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(&['/', '.']).collect();

    for part in parts.iter().rev() {
        let normalized = normalize_language_code(part);
        if LANGUAGE_CODES.contains(&normalized) {
            return normalized;
        }
    }

    "unknown".to_string()
}
