//! Catalogs of locale bundles with fallback resolution.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::bundle::{
    LocaleBundle,
    LookupError,
};
use crate::config::LocaleSettings;
use crate::discover::find_locale_files;
use crate::loader::{
    LoadError,
    load_bundle_file,
};

/// What [`LocaleCatalog::resolve`] does when a key misses the requested
/// bundle.
///
/// Encodes the caller-side policy for lookup failures: propagate the error,
/// fall back to a default language, or surface the raw key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Propagate [`LookupError::KeyNotFound`].
    #[default]
    None,
    /// Retry the lookup in the named language's bundle.
    Language(String),
    /// Resolve to the key path itself.
    RawKey,
}

/// A read-only registry of locale bundles keyed by language code.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    bundles: BTreeMap<String, LocaleBundle>,
    fallback: Fallback,
}

impl LocaleCatalog {
    /// Creates an empty catalog with the given fallback policy.
    #[must_use]
    pub fn new(fallback: Fallback) -> Self {
        Self { bundles: BTreeMap::new(), fallback }
    }

    /// Loads every locale file under `root` into a catalog.
    ///
    /// Files whose language cannot be detected from their path are skipped
    /// with a warning. The fallback policy comes from
    /// `settings.default_language`.
    ///
    /// # Errors
    /// Discovery or load failures.
    pub fn load_dir(root: &Path, settings: &LocaleSettings) -> Result<Self, LoadError> {
        let files = find_locale_files(root, settings)?;
        tracing::debug!(root = %root.display(), count = files.len(), "Loading locale directory");

        let fallback = settings
            .default_language
            .as_ref()
            .map_or(Fallback::None, |language| Fallback::Language(language.clone()));
        let mut catalog = Self::new(fallback);

        for file in files {
            let bundle = load_bundle_file(&file, &settings.key_separator)?;
            if bundle.language() == "unknown" {
                tracing::warn!(
                    path = %file.display(),
                    "Skipping locale file with undetectable language"
                );
                continue;
            }
            catalog.insert(bundle);
        }

        Ok(catalog)
    }

    /// Adds a bundle, replacing any bundle of the same language.
    pub fn insert(&mut self, bundle: LocaleBundle) {
        self.bundles.insert(bundle.language().to_string(), bundle);
    }

    /// The bundle for a language, if loaded.
    #[must_use]
    pub fn bundle(&self, language: &str) -> Option<&LocaleBundle> {
        self.bundles.get(language)
    }

    /// Language codes in the catalog, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Number of bundles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Returns true if the catalog holds no bundles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Resolves a key in the requested language, applying the fallback
    /// policy when the primary lookup fails.
    ///
    /// # Errors
    /// [`LookupError::KeyNotFound`] when the key resolves nowhere and the
    /// policy is [`Fallback::None`], or the fallback bundle misses it too.
    pub fn resolve<'a>(
        &'a self,
        language: &str,
        key_path: &'a str,
    ) -> Result<Cow<'a, str>, LookupError> {
        if let Some(bundle) = self.bundles.get(language)
            && let Ok(text) = bundle.get(key_path)
        {
            return Ok(Cow::Borrowed(text));
        }

        match &self.fallback {
            Fallback::None => Err(LookupError::KeyNotFound { key: key_path.to_string() }),
            Fallback::Language(default) => {
                if default != language
                    && let Some(bundle) = self.bundles.get(default)
                    && let Ok(text) = bundle.get(key_path)
                {
                    tracing::debug!(language, default = %default, key_path, "Fell back to default language");
                    return Ok(Cow::Borrowed(text));
                }
                Err(LookupError::KeyNotFound { key: key_path.to_string() })
            }
            Fallback::RawKey => Ok(Cow::Borrowed(key_path)),
        }
    }
}
