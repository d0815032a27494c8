use thiserror::Error;

/// Raised when user-entered text cannot be read as a finite number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{raw}` is not a valid number")]
pub struct NumberParseError {
    pub raw: String,
}

/// Parse a user-entered decimal number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected so
/// downstream arithmetic always works on finite values.
///
/// # Errors
///
/// Returns `NumberParseError` if the text is not a finite `f64`.
pub fn parse_number(raw: &str) -> Result<f64, NumberParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| NumberParseError {
            raw: raw.to_owned(),
        })
}
