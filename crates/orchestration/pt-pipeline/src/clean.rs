//! Suburb name cleanup for ABS state-suburb names.

/// Prefix the ABS puts on unincorporated ACT suburbs.
const ACT_REMAINDER_PREFIX: &str = "ACT Remainder -";

/// Normalizes an ABS suburb name.
///
/// Drops a parenthesized qualifier and everything after it (only when the
/// `(` is not the first character), removes the first `ACT Remainder -`
/// prefix, then trims surrounding whitespace.
pub fn clean_suburb_name(raw: &str) -> String {
    let name = match raw.find('(') {
        Some(idx) if idx > 0 => &raw[..idx],
        _ => raw,
    };

    name.replacen(ACT_REMAINDER_PREFIX, "", 1).trim().to_string()
}
