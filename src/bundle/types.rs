//! The locale bundle type and its lookup errors.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::flatten::{
    flatten_value,
    is_child_key,
};

/// Lookup failure for a translation key path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The path is absent, or resolves to a namespace instead of a leaf.
    #[error("translation key not found: '{key}'")]
    KeyNotFound {
        /// The key path that failed to resolve.
        key: String,
    },
}

/// An immutable mapping from dotted UI string keys to translation templates
/// for one language.
///
/// Constructed once from a nested locale document, then read-only. Plain
/// owned data, so any number of threads may read it without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    language: String,
    separator: String,
    keys: HashMap<String, String>,
}

impl LocaleBundle {
    /// Builds a bundle by flattening a nested locale document.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use rte_locale::LocaleBundle;
    ///
    /// let doc = json!({ "common": { "ok": "Akcepti" } });
    /// let bundle = LocaleBundle::from_value("eo", &doc, ".");
    ///
    /// assert_eq!(bundle.get("common.ok"), Ok("Akcepti"));
    /// ```
    #[must_use]
    pub fn from_value(language: impl Into<String>, document: &Value, separator: &str) -> Self {
        let keys = flatten_value(document, separator);
        Self { language: language.into(), separator: separator.to_string(), keys }
    }

    /// Builds a bundle from an already-flat key map.
    #[must_use]
    pub fn from_flat(
        language: impl Into<String>,
        separator: impl Into<String>,
        keys: HashMap<String, String>,
    ) -> Self {
        Self { language: language.into(), separator: separator.into(), keys }
    }

    /// Resolves a dotted key path to its translation template.
    ///
    /// # Errors
    /// [`LookupError::KeyNotFound`] if the path is absent or names a
    /// namespace rather than a leaf.
    pub fn get(&self, key_path: &str) -> Result<&str, LookupError> {
        self.keys
            .get(key_path)
            .map(String::as_str)
            .ok_or_else(|| LookupError::KeyNotFound { key: key_path.to_string() })
    }

    /// Returns true if the exact key path resolves to a leaf template.
    #[must_use]
    pub fn contains(&self, key_path: &str) -> bool {
        self.keys.contains_key(key_path)
    }

    /// Returns true if the path names a namespace (keys exist below it).
    #[must_use]
    pub fn is_namespace(&self, path: &str) -> bool {
        self.keys.keys().any(|key| is_child_key(key, path, &self.separator))
    }

    /// Iterates over all `(key path, template)` pairs, unordered.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys.iter().map(|(key, template)| (key.as_str(), template.as_str()))
    }

    /// The language code this bundle translates to.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The separator joining namespace segments in key paths.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of leaf templates in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the bundle holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn sample_bundle() -> LocaleBundle {
        let doc = json!({
            "common": {
                "ok": "Akcepti",
                "cancel": "Rezigni"
            },
            "table": {
                "cell": {
                    "menu": "Ĉelo"
                }
            }
        });
        LocaleBundle::from_value("eo", &doc, ".")
    }

    #[googletest::test]
    fn get_resolves_leaf() {
        let bundle = sample_bundle();

        assert_that!(bundle.get("common.ok"), ok(eq("Akcepti")));
        assert_that!(bundle.get("table.cell.menu"), ok(eq("Ĉelo")));
    }

    #[googletest::test]
    fn get_rejects_missing_key() {
        let bundle = sample_bundle();

        assert_that!(
            bundle.get("nonexistent.key"),
            err(eq(LookupError::KeyNotFound { key: "nonexistent.key".to_string() }))
        );
    }

    #[googletest::test]
    fn get_rejects_namespace_path() {
        let bundle = sample_bundle();

        // "table.cell" groups keys; it is not itself a translation.
        assert_that!(bundle.get("table.cell"), err(anything()));
        assert_that!(bundle.is_namespace("table.cell"), eq(true));
        assert_that!(bundle.is_namespace("table.cell.menu"), eq(false));
    }

    #[rstest]
    #[case("common.ok", true)]
    #[case("table.cell.menu", true)]
    #[case("table.cell", false)]
    #[case("missing", false)]
    fn contains_matches_leaf_keys_only(#[case] key: &str, #[case] expected: bool) {
        assert_that!(sample_bundle().contains(key), eq(expected));
    }

    #[googletest::test]
    fn entries_iterates_all_leaves() {
        let bundle = sample_bundle();

        expect_that!(bundle.entries().count(), eq(bundle.len()));
        expect_that!(bundle.len(), eq(3));
        expect_that!(bundle.is_empty(), eq(false));
    }

    #[googletest::test]
    fn bundles_from_same_document_compare_equal() {
        assert_that!(sample_bundle(), eq(sample_bundle()));
    }

    #[googletest::test]
    fn from_flat_preserves_keys() {
        let mut keys = std::collections::HashMap::new();
        keys.insert("common.ok".to_string(), "Akcepti".to_string());

        let bundle = LocaleBundle::from_flat("eo", ".", keys);

        assert_that!(bundle.language(), eq("eo"));
        assert_that!(bundle.separator(), eq("."));
        assert_that!(bundle.get("common.ok"), ok(eq("Akcepti")));
    }
}
