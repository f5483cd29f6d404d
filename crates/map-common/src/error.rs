//! Error types for coordinate parsing.
//!
//! The conversions themselves never fail; these errors only arise when
//! coordinates arrive as text or JSON.

use thiserror::Error;

/// Result type alias using CoordError.
pub type CoordResult<T> = Result<T, CoordError>;

/// Errors raised while reading coordinates from external input.
#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Invalid coordinate pair: {0}. Expected 'a,b'")]
    InvalidPair(String),

    #[error("Invalid number in coordinate pair: {0}")]
    InvalidNumber(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for CoordError {
    fn from(err: serde_json::Error) -> Self {
        CoordError::InvalidPayload(format!("JSON error: {}", err))
    }
}

/// Split `"a,b"` into two floats.
pub(crate) fn parse_pair(s: &str) -> CoordResult<(f64, f64)> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(CoordError::InvalidPair(s.to_string()));
    }

    let first = parts[0]
        .parse()
        .map_err(|_| CoordError::InvalidNumber(parts[0].to_string()))?;
    let second = parts[1]
        .parse()
        .map_err(|_| CoordError::InvalidNumber(parts[1].to_string()))?;

    Ok((first, second))
}
