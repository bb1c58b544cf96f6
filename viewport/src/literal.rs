use crate::{anchor::RawLiteralFragment, error::ParseError};

/// Parses the fragment as a JSON array of exactly `N` numbers.
pub fn numeric_array<const N: usize>(
    fragment: &RawLiteralFragment<'_>,
) -> Result<[f64; N], ParseError> {
    let cleaned = fragment.cleaned();
    let values: Vec<f64> =
        serde_json::from_str(&cleaned).map_err(|e| ParseError::Malformed {
            field: fragment.field,
            fragment: cleaned.clone(),
            reason: e.to_string(),
        })?;

    let found = values.len();
    values.try_into().map_err(|_| ParseError::Arity {
        field: fragment.field,
        fragment: cleaned,
        expected: N,
        found,
    })
}

/// Parses the fragment as a single integer, surrounding whitespace allowed.
/// Range checks are left to validation, so negative values parse.
pub fn integer(fragment: &RawLiteralFragment<'_>) -> Result<i64, ParseError> {
    let cleaned = fragment.cleaned();
    cleaned
        .trim()
        .parse::<i64>()
        .map_err(|e| ParseError::Malformed {
            field: fragment.field,
            fragment: cleaned.clone(),
            reason: e.to_string(),
        })
}
