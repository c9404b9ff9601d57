//! Locale bundles embedded in the crate.

use crate::bundle::LocaleBundle;

use super::read::{
    LoadError,
    parse_document,
};

/// Esperanto UI strings, as shipped with the editor.
const ESPERANTO_JSON: &str = include_str!("../../locales/eo.json");

/// Returns the embedded Esperanto bundle.
///
/// # Errors
/// [`LoadError::Parse`] if the embedded document is corrupt.
pub fn esperanto() -> Result<LocaleBundle, LoadError> {
    let document = parse_document(ESPERANTO_JSON)?;
    Ok(LocaleBundle::from_value("eo", &document, "."))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn embedded_bundle_parses() {
        let bundle = esperanto().unwrap();

        expect_that!(bundle.language(), eq("eo"));
        expect_that!(bundle.get("common.ok"), ok(eq("Akcepti")));
        expect_that!(bundle.len(), eq(679));
    }
}
