//! Template formatting with caller-supplied arguments.

use std::collections::HashMap;

use thiserror::Error;

use super::scan::scan;
use super::types::PlaceholderKind;

/// Formatting failure under the strict policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder had no matching argument.
    #[error("no argument supplied for placeholder '{placeholder}'")]
    MissingArgument {
        /// Canonical spelling of the unresolved token.
        placeholder: String,
    },
}

/// Arguments for placeholder substitution.
///
/// Positional values fill `%1`, `%2`, … in the order they were added; named
/// values fill `%name`, `{name}`, and `${name}` alike.
#[derive(Debug, Clone, Default)]
pub struct FormatArgs {
    positional: Vec<String>,
    named: HashMap<String, String>,
}

impl FormatArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next positional value (`%1` first).
    #[must_use]
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named value.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    fn lookup(&self, kind: &PlaceholderKind) -> Option<&str> {
        match kind {
            PlaceholderKind::Positional(index) => {
                let slot = usize::try_from(index.checked_sub(1)?).ok()?;
                self.positional.get(slot).map(String::as_str)
            }
            PlaceholderKind::Named { name, .. } => self.named.get(name).map(String::as_str),
        }
    }
}

/// Substitutes every placeholder in `template`, failing on the first token
/// without a matching argument.
///
/// Substitution is single-pass: placeholder syntax inside argument values is
/// copied through, never re-expanded.
///
/// # Errors
/// [`FormatError::MissingArgument`] for the first unresolved token.
pub fn format(template: &str, args: &FormatArgs) -> Result<String, FormatError> {
    render(template, args, true)
}

/// Substitutes what it can, leaving unresolved tokens verbatim.
#[must_use]
pub fn format_lenient(template: &str, args: &FormatArgs) -> String {
    // Lenient rendering cannot fail: unresolved tokens are copied through.
    render(template, args, false).unwrap_or_else(|_| template.to_string())
}

fn render(template: &str, args: &FormatArgs, strict: bool) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;

    for placeholder in scan(template) {
        output.push_str(template.get(cursor..placeholder.start).unwrap_or(""));

        match args.lookup(&placeholder.kind) {
            Some(value) => output.push_str(value),
            None if strict => {
                return Err(FormatError::MissingArgument { placeholder: placeholder.canonical() });
            }
            None => output.push_str(placeholder.token(template)),
        }

        cursor = placeholder.end;
    }

    output.push_str(template.get(cursor..).unwrap_or(""));
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn formats_positional_token() {
        let args = FormatArgs::new().positional("3");

        let result = format("%1 anstataŭigita(j) apero(j).", &args);

        assert_that!(result, ok(eq("3 anstataŭigita(j) apero(j).")));
    }

    #[googletest::test]
    fn formats_multiple_positional_tokens_in_order() {
        let args = FormatArgs::new().positional("larĝo").positional("px");

        let result = format("La \"%1\" kampo bezonas unuon (%2).", &args);

        assert_that!(result, ok(eq("La \"larĝo\" kampo bezonas unuon (px).")));
    }

    #[googletest::test]
    fn formats_named_tokens_across_styles() {
        let args = FormatArgs::new()
            .named("current", "3")
            .named("max", "7")
            .named("formats", "PNG, GIF");

        let braced = format("{current} el {max} faritaj...", &args);
        let dollar = format("The ${formats} file format(s) are not supported.", &args);
        let percent = format("Nuna versio: %current", &args);

        assert_that!(braced, ok(eq("3 el 7 faritaj...")));
        assert_that!(dollar, ok(eq("The PNG, GIF file format(s) are not supported.")));
        assert_that!(percent, ok(eq("Nuna versio: 3")));
    }

    #[googletest::test]
    fn repeated_token_substitutes_every_occurrence() {
        let args = FormatArgs::new().named("link", "https://example.org");

        let result = format("<a href=\"%link\">%link</a>", &args);

        assert_that!(
            result,
            ok(eq("<a href=\"https://example.org\">https://example.org</a>"))
        );
    }

    #[googletest::test]
    fn strict_formatting_rejects_missing_named_argument() {
        let args = FormatArgs::new().named("current", "3");

        let result = format("{current} el {max}", &args);

        assert_that!(
            result,
            err(eq(FormatError::MissingArgument { placeholder: "{max}".to_string() }))
        );
    }

    #[googletest::test]
    fn strict_formatting_rejects_out_of_range_positional() {
        let args = FormatArgs::new().positional("nur unu");

        let result = format("%1 kaj %2", &args);

        assert_that!(
            result,
            err(eq(FormatError::MissingArgument { placeholder: "%2".to_string() }))
        );
    }

    #[googletest::test]
    fn lenient_formatting_leaves_unresolved_tokens_verbatim() {
        let args = FormatArgs::new().named("current", "4");

        let result = format_lenient("{current} el {max} faritaj", &args);

        assert_that!(result, eq("4 el {max} faritaj"));
    }

    #[googletest::test]
    fn template_without_tokens_is_unchanged() {
        let args = FormatArgs::new().positional("ignored");

        let result = format("Ĝisrandigi Ambaŭflanke", &args);

        assert_that!(result, ok(eq("Ĝisrandigi Ambaŭflanke")));
    }

    #[googletest::test]
    fn argument_values_are_not_reexpanded() {
        let args = FormatArgs::new().positional("%2").positional("unused");

        let result = format("%1", &args);

        assert_that!(result, ok(eq("%2")));
    }
}
