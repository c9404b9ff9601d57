//! Locale file discovery under a directory root.

use std::path::{
    Path,
    PathBuf,
};

use globset::GlobBuilder;
use ignore::WalkBuilder;

use crate::config::LocaleSettings;
use crate::loader::LoadError;

/// Finds locale files under `root` matching the configured file pattern.
///
/// The walk honors gitignore rules; the pattern is matched against paths
/// relative to `root`. Results are sorted so discovery order is
/// deterministic.
///
/// # Errors
/// [`LoadError::Pattern`] if the configured glob does not compile.
pub fn find_locale_files(
    root: &Path,
    settings: &LocaleSettings,
) -> Result<Vec<PathBuf>, LoadError> {
    // `*` must not cross directory boundaries; `**` stays recursive.
    let matcher = GlobBuilder::new(&settings.file_pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| LoadError::Pattern {
            pattern: settings.file_pattern.clone(),
            message: e.to_string(),
        })?
        .compile_matcher();

    let mut found = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(relative) {
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}
