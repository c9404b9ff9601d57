//! Locale file reading and parsing.

use std::path::Path;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::bundle::LocaleBundle;

use super::language::detect_language_from_path;

/// Failure while reading or parsing a locale file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("failed to parse locale file: {0}")]
    Parse(#[from] jsonc_parser::errors::ParseError),

    /// The file parsed to no value at all (blank, or comments only).
    #[error("locale file holds no document")]
    EmptyDocument,

    /// A locale file glob pattern did not compile.
    #[error("invalid locale file pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        message: String,
    },
}

/// Parses a locale document from JSON text.
///
/// Comments and trailing commas are tolerated, since locale packs are often
/// maintained by hand.
pub(crate) fn parse_document(text: &str) -> Result<Value, LoadError> {
    let value = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())?;
    value.ok_or(LoadError::EmptyDocument)
}

/// Loads a locale bundle from a file, detecting the language from the path.
///
/// Loading is idempotent: reading the same file twice yields bundles that
/// compare equal.
///
/// # Errors
/// - file read errors
/// - JSON parse errors
pub fn load_bundle_file(path: &Path, separator: &str) -> Result<LocaleBundle, LoadError> {
    tracing::debug!(path = %path.display(), "Loading locale file");

    let text = std::fs::read_to_string(path)?;
    let document = parse_document(&text)?;
    let language = detect_language_from_path(path);

    Ok(LocaleBundle::from_value(language, &document, separator))
}
