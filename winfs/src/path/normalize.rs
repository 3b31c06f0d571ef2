//! Path text normalization functions.
//!
//! This module canonicalizes separators in path text:
//! - Both `/` and `\` become [`SEPARATOR`]
//! - Runs of separators collapse into one
//! - A leading double separator (UNC prefix) is kept as exactly two

/// The canonical separator used in normalized text.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Returns true for either separator accepted in input text.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize path text.
///
/// # Examples
///
/// ```
/// use winfs::path::normalize::{normalize, SEPARATOR};
///
/// let expected = format!("C:{SEPARATOR}a{SEPARATOR}b{SEPARATOR}");
/// assert_eq!(normalize("C:\\a//b\\"), expected);
///
/// // Idempotent
/// assert_eq!(normalize(&normalize("x\\\\y")), normalize("x\\\\y"));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    // UNC prefix: keep exactly two leading separators
    if chars.peek().copied().is_some_and(is_separator) {
        chars.next();
        out.push(SEPARATOR);
        if chars.peek().copied().is_some_and(is_separator) {
            out.push(SEPARATOR);
        }
        while chars.peek().copied().is_some_and(is_separator) {
            chars.next();
        }
    }

    let mut previous_was_separator = false;
    for c in chars {
        if is_separator(c) {
            if !previous_was_separator {
                out.push(SEPARATOR);
            }
            previous_was_separator = true;
        } else {
            out.push(c);
            previous_was_separator = false;
        }
    }

    out
}

/// Strips `prefix` from `text` only at a separator boundary.
///
/// Both arguments must already be normalized. The remainder is returned
/// without its leading separator.
///
/// # Examples
///
/// ```
/// use winfs::path::normalize::{normalize, strip_dir_prefix};
///
/// let text = normalize("C:/a/b/c.txt");
/// assert_eq!(strip_dir_prefix(&text, &normalize("C:/a/b")), Some("c.txt"));
/// assert_eq!(strip_dir_prefix(&text, &normalize("C:/a/b/")), Some("c.txt"));
/// assert_eq!(strip_dir_prefix(&normalize("C:/a/bc"), &normalize("C:/a/b")), None);
/// ```
#[must_use]
pub fn strip_dir_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(prefix)?;
    if prefix.ends_with(SEPARATOR) || rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix(SEPARATOR)
}
