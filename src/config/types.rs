//! Settings types and validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A single settings validation failure, addressed by field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Settings error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "requiredLanguages[0]")
    pub field_path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for a field path.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed validation.
    #[error("Settings validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for locale discovery and lookup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Glob matched against locale file paths relative to the locale root.
    pub file_pattern: String,

    /// Separator joining namespace segments in key paths.
    pub key_separator: String,

    /// Language used by catalogs as the lookup fallback.
    pub default_language: Option<String>,

    /// Languages a locale pack must ship. Empty means no requirement.
    pub required_languages: Vec<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            file_pattern: "**/*.json".to_string(),
            key_separator: ".".to_string(),
            default_language: None,
            required_languages: Vec::new(),
        }
    }
}

impl LocaleSettings {
    /// # Errors
    /// - empty separator or pattern
    /// - invalid glob pattern
    /// - blank language entries
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if let Some(language) = &self.default_language
            && language.is_empty()
        {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The language cannot be empty. Please specify a code (e.g., \"en\"), or remove this field",
            ));
        }

        for (index, language) in self.required_languages.iter().enumerate() {
            if language.is_empty() {
                errors.push(ValidationError::new(
                    format!("requiredLanguages[{index}]"),
                    "The language cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
