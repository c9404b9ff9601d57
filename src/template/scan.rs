//! Placeholder scanning.

use super::types::{
    NamedStyle,
    Placeholder,
    PlaceholderKind,
};

/// Finds all placeholder tokens in a template, in order of appearance.
///
/// Recognized patterns, as used by editor locale packs:
/// - positional: `%1`, `%2`, …
/// - percent-named: `%current`
/// - braced-named: `{current}`
/// - dollar-braced-named: `${formats}`
///
/// A `%`, `{`, or `${` not followed by a digit run or identifier is literal
/// text, so prose like `(px, %, in)` scans clean.
#[must_use]
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();
    let mut offset = 0;

    while let Some(rest) = template.get(offset..) {
        let Some(relative) = rest.find(['%', '{', '$']) else {
            break;
        };
        let start = offset + relative;
        let Some(candidate) = template.get(start..) else {
            break;
        };

        if let Some((kind, length)) = parse_token(candidate) {
            placeholders.push(Placeholder { kind, start, end: start + length });
            offset = start + length;
        } else {
            // All three sigils are single-byte; step past and keep scanning.
            offset = start + 1;
        }
    }

    placeholders
}

/// Parses a placeholder token at the start of `text`, returning its kind and
/// byte length.
fn parse_token(text: &str) -> Option<(PlaceholderKind, usize)> {
    if let Some(body) = text.strip_prefix("${") {
        let (name, consumed) = braced_name(body)?;
        return Some((
            PlaceholderKind::Named { name, style: NamedStyle::DollarBrace },
            consumed + 2,
        ));
    }

    if let Some(body) = text.strip_prefix('{') {
        let (name, consumed) = braced_name(body)?;
        return Some((PlaceholderKind::Named { name, style: NamedStyle::Brace }, consumed + 1));
    }

    if let Some(body) = text.strip_prefix('%') {
        let digits = leading_digits(body);
        if !digits.is_empty() {
            let index: u32 = digits.parse().ok()?;
            return Some((PlaceholderKind::Positional(index), digits.len() + 1));
        }

        let length = identifier_length(body);
        if length > 0 {
            let name = body.get(..length)?;
            return Some((
                PlaceholderKind::Named { name: name.to_string(), style: NamedStyle::Percent },
                length + 1,
            ));
        }
    }

    None
}

/// Parses `ident}` after an opening brace, returning the identifier and the
/// byte length including the closing brace.
fn braced_name(body: &str) -> Option<(String, usize)> {
    let length = identifier_length(body);
    if length == 0 {
        return None;
    }

    let name = body.get(..length)?;
    if !body.get(length..)?.starts_with('}') {
        return None;
    }

    Some((name.to_string(), length + 1))
}

fn leading_digits(body: &str) -> &str {
    let length = body.chars().take_while(char::is_ascii_digit).count();
    body.get(..length).unwrap_or("")
}

/// Length of a leading `[A-Za-z_][A-Za-z0-9_]*` run, in bytes.
fn identifier_length(text: &str) -> usize {
    let mut length = 0;
    for ch in text.chars() {
        let valid = if length == 0 {
            ch.is_ascii_alphabetic() || ch == '_'
        } else {
            ch.is_ascii_alphanumeric() || ch == '_'
        };
        if !valid {
            break;
        }
        length += 1;
    }
    length
}
