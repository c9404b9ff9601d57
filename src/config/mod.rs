//! Locale toolchain settings.
mod loader;
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_from_dir,
};
pub use types::{
    ConfigError,
    LocaleSettings,
    ValidationError,
};
