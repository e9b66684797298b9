//! Sort key extraction

use crate::config::SortConfig;

/// Return the part of `line` used for comparison
///
/// With no key field configured the whole line is the key. A field that does
/// not exist also yields the whole line, as GNU sort does.
pub fn extract_key<'a>(line: &'a str, config: &SortConfig) -> &'a str {
    if config.key == 0 {
        return line;
    }

    let field = match config.field_separator {
        Some(sep) => line.split(sep).nth(config.key - 1),
        None => line
            .split(is_blank)
            .filter(|field| !field.is_empty())
            .nth(config.key - 1),
    };

    field.unwrap_or(line)
}

/// Space or tab
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Strip leading blanks, returning the rest and how many were removed
#[inline]
pub fn skip_leading_blanks(s: &str) -> (&str, usize) {
    let trimmed = s.trim_start_matches(is_blank);
    (trimmed, s.len() - trimmed.len())
}
