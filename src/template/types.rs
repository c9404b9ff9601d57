//! Placeholder token types.

/// Syntax family of a named placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedStyle {
    /// `%current`
    Percent,
    /// `{current}`
    Brace,
    /// `${formats}`
    DollarBrace,
}

/// The substitutable content of a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `%1`, `%2`, … (1-based).
    Positional(u32),
    /// A named token in one of the three styles.
    Named {
        /// The identifier between the delimiters.
        name: String,
        /// The delimiter style the token was written in.
        style: NamedStyle,
    },
}

impl PlaceholderKind {
    /// Canonical token spelling (`%1`, `%current`, `{current}`,
    /// `${formats}`).
    #[must_use]
    pub fn canonical(&self) -> String {
        match self {
            Self::Positional(n) => format!("%{n}"),
            Self::Named { name, style: NamedStyle::Percent } => format!("%{name}"),
            Self::Named { name, style: NamedStyle::Brace } => format!("{{{name}}}"),
            Self::Named { name, style: NamedStyle::DollarBrace } => format!("${{{name}}}"),
        }
    }
}

/// A placeholder occurrence within a translation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// What the token substitutes.
    pub kind: PlaceholderKind,
    /// Byte offset of the token start within the template.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
}

impl Placeholder {
    /// The token text as it appears in `template`.
    ///
    /// Returns an empty string if the offsets do not lie on character
    /// boundaries of `template`.
    #[must_use]
    pub fn token<'t>(&self, template: &'t str) -> &'t str {
        template.get(self.start..self.end).unwrap_or("")
    }

    /// Canonical token spelling, independent of the source template.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.kind.canonical()
    }
}
