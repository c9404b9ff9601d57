//! Cross-locale audits against a reference bundle.

use std::collections::BTreeSet;

use crate::bundle::LocaleBundle;
use crate::catalog::LocaleCatalog;
use crate::config::LocaleSettings;
use crate::template::{
    Placeholder,
    scan,
};

/// A leaf whose placeholder set differs from the reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatch {
    /// The key path of the disagreeing leaf.
    pub key: String,
    /// Canonical tokens in the reference template, sorted.
    pub expected: Vec<String>,
    /// Canonical tokens in the audited template, sorted.
    pub found: Vec<String>,
}

/// Result of auditing a bundle against a reference bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Keys present in the reference but absent from the audited bundle.
    pub missing_keys: Vec<String>,
    /// Keys present in the audited bundle but absent from the reference.
    pub extra_keys: Vec<String>,
    /// Keys whose templates disagree on placeholders.
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl AuditReport {
    /// True when the audited bundle matches the reference key-for-key.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
            && self.extra_keys.is_empty()
            && self.placeholder_mismatches.is_empty()
    }
}

/// Audits `bundle` against `reference`.
///
/// Reports keys missing from or extra to the reference key set, and leaves
/// present in both whose placeholder token sets differ. Token order within a
/// template does not matter; translations reorder arguments freely. All
/// report fields are sorted by key.
#[must_use]
pub fn audit(bundle: &LocaleBundle, reference: &LocaleBundle) -> AuditReport {
    let mut report = AuditReport::default();

    for (key, reference_template) in reference.entries() {
        match bundle.get(key) {
            Err(_) => report.missing_keys.push(key.to_string()),
            Ok(template) => {
                let expected = placeholder_set(reference_template);
                let found = placeholder_set(template);
                if expected != found {
                    report.placeholder_mismatches.push(PlaceholderMismatch {
                        key: key.to_string(),
                        expected: expected.into_iter().collect(),
                        found: found.into_iter().collect(),
                    });
                }
            }
        }
    }

    for (key, _) in bundle.entries() {
        if !reference.contains(key) {
            report.extra_keys.push(key.to_string());
        }
    }

    report.missing_keys.sort();
    report.extra_keys.sort();
    report.placeholder_mismatches.sort_by(|a, b| a.key.cmp(&b.key));

    report
}

/// Returns the required languages missing from the catalog, sorted.
#[must_use]
pub fn missing_languages(catalog: &LocaleCatalog, settings: &LocaleSettings) -> Vec<String> {
    let mut missing: Vec<String> = settings
        .required_languages
        .iter()
        .filter(|language| catalog.bundle(language).is_none())
        .cloned()
        .collect();
    missing.sort();
    missing
}

fn placeholder_set(template: &str) -> BTreeSet<String> {
    scan(template).iter().map(Placeholder::canonical).collect()
}
