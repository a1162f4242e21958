//! Small normalization helpers shared by extraction and editing.

use crate::types::UNKNOWN;

/// Clamp a measured numeric value to the record domain: anything ≤ 0 (or out
/// of `i32` range) becomes [`UNKNOWN`].
pub(crate) fn clamp_positive(value: i64) -> i32 {
    if value <= 0 {
        return UNKNOWN;
    }
    i32::try_from(value).unwrap_or(UNKNOWN)
}

/// Decompose a compound "N/M" position-of-total field.
///
/// - `"3/12"` -> (3, 12)
/// - `"5/0"`  -> (5, UNKNOWN), a zero total carries no information
/// - `"7"`    -> (7, UNKNOWN)
/// - non-numeric components fall back to UNKNOWN individually; the rest of
///   the record is unaffected
pub(crate) fn parse_number_pair(raw: &str) -> (i32, i32) {
    let mut parts = raw.splitn(2, '/');
    let number = parts.next().map_or(UNKNOWN, parse_component);
    let total = parts.next().map_or(UNKNOWN, parse_total);
    (number, total)
}

/// Parse one numeric component; empty or non-numeric text yields UNKNOWN.
pub(crate) fn parse_component(raw: &str) -> i32 {
    raw.trim().parse::<u32>().map_or(UNKNOWN, |n| {
        i32::try_from(n).unwrap_or(UNKNOWN)
    })
}

/// Parse a total component; 0 is normalized to UNKNOWN, not kept literally.
pub(crate) fn parse_total(raw: &str) -> i32 {
    match parse_component(raw) {
        0 => UNKNOWN,
        n => n,
    }
}

/// Join multi-valued text in source order with `;`. Zero values yield an
/// empty string; text has no "unknown", only "absent".
pub(crate) fn join_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().collect::<Vec<_>>().join(";")
}
