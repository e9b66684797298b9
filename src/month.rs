//! Month name resolution for month sort (-M)

use crate::key::skip_leading_blanks;

const MONTHS: [&[u8; 3]; 12] = [
    b"JAN", b"FEB", b"MAR", b"APR", b"MAY", b"JUN", b"JUL", b"AUG", b"SEP", b"OCT", b"NOV",
    b"DEC",
];

/// Month number (1-12) of the abbreviation at the start of `s`, 0 if none
///
/// Leading blanks are skipped and exactly three characters are inspected,
/// case-insensitively.
pub fn month_order(s: &str) -> u8 {
    let (s, _) = skip_leading_blanks(s);
    let Some(prefix) = s.as_bytes().get(..3) else {
        return 0;
    };

    MONTHS
        .iter()
        .position(|name| prefix.eq_ignore_ascii_case(&name[..]))
        .map_or(0, |idx| idx as u8 + 1)
}
