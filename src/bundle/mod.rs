//! Locale bundle construction and lookup.
mod flatten;
mod types;

pub use flatten::{
    flatten_value,
    is_child_key,
};
pub use types::{
    LocaleBundle,
    LookupError,
};
