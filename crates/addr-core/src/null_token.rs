//! Sentinel null-token coercion.
//!
//! The source format writes a literal marker string (by default `<Null>`)
//! into cells whose value is intentionally absent. This pre-pass coerces
//! that marker to true absence and is applied uniformly to every optional
//! field before the component record is constructed. The comparison is
//! case-sensitive and whole-value: a cell merely containing the marker is
//! left alone.

/// Coerce the sentinel marker to absence; pass everything else through.
pub fn normalize_null_token<'a>(value: Option<&'a str>, null_token: &str) -> Option<&'a str> {
    match value {
        Some(v) if v == null_token => None,
        other => other,
    }
}
