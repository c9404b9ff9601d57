//! Reading locale bundles from files and embedded data.
mod builtin;
mod language;
mod read;

pub use builtin::esperanto;
pub use language::detect_language_from_path;
pub use read::{
    LoadError,
    load_bundle_file,
};
