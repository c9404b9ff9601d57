//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};

/// Name of the optional settings file looked up in the locale root.
pub const SETTINGS_FILE_NAME: &str = ".rte-locale.json";

/// Loads settings from a directory holding an optional settings file.
///
/// # Arguments
/// * `root` - the locale root directory
///
/// # Returns
/// - `Ok(Some(settings))`: settings file found and parsed
/// - `Ok(None)`: no settings file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - file read errors
/// - JSON parse errors
pub fn load_from_dir(root: &Path) -> Result<Option<LocaleSettings>, ConfigError> {
    let settings_path = root.join(SETTINGS_FILE_NAME);

    if !settings_path.exists() {
        tracing::debug!("Settings file not found: {:?}", settings_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", settings_path);

    let content = std::fs::read_to_string(&settings_path)?;
    let settings: LocaleSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_dir`: settings file present
    #[rstest]
    fn loads_valid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"{"keySeparator": "/"}"#;
        fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), content).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        assert_eq!(settings.unwrap().key_separator, "/");
    }

    /// `load_from_dir`: no settings file
    #[rstest]
    fn missing_settings_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON parse error
    #[rstest]
    fn rejects_invalid_settings_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), "ne valida json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_err());
    }
}
