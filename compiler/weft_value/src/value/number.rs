//! Number formatting and parsing shared by coercions.

/// Canonical string form of a number.
///
/// Finite numbers use the shortest representation that round-trips
/// (`42`, `0.5`, `-0`); non-finite numbers spell out their name.
pub(super) fn format(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        number.to_string()
    }
}

/// Parse a string the way templates coerce text into numbers.
///
/// Surrounding whitespace is ignored; unparsable text is zero.
pub(super) fn parse(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Convert a number to an index when it is a non-negative integer below `len`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "bounds and integrality are checked before the cast"
)]
pub(crate) fn to_index(number: f64, len: usize) -> Option<usize> {
    if number >= 0.0 && number.fract() == 0.0 && number < len as f64 {
        Some(number as usize)
    } else {
        None
    }
}
