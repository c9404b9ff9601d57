//! Shared helpers for unit tests.

use std::collections::HashMap;

use crate::bundle::LocaleBundle;

/// Builds a bundle from flat `(key path, template)` pairs.
pub(crate) fn bundle_from_pairs(language: &str, pairs: &[(&str, &str)]) -> LocaleBundle {
    let keys: HashMap<String, String> =
        pairs.iter().map(|(key, template)| ((*key).to_string(), (*template).to_string())).collect();
    LocaleBundle::from_flat(language, ".", keys)
}
