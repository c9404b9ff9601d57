//! Translation template placeholders: scanning and substitution.
mod format;
mod scan;
mod types;

pub use format::{
    FormatArgs,
    FormatError,
    format,
    format_lenient,
};
pub use scan::scan;
pub use types::{
    NamedStyle,
    Placeholder,
    PlaceholderKind,
};
