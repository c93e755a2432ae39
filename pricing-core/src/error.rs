//! Error taxonomy shared by every pricing operation.

use thiserror::Error;

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cost was requested over a series with no readings.
    #[error("no readings to price")]
    EmptySeries,

    /// Every reading in the series shares one timestamp, so no time has elapsed.
    #[error("readings span zero elapsed time")]
    ZeroElapsedTime,

    /// A cost exceeded the range of the decimal type.
    #[error("cost computation overflowed")]
    Overflow,

    /// Malformed input rejected at the boundary (store requests, catalog seeding).
    #[error("validation error: {0}")]
    Validation(String),

    /// Recommendation limit that is zero or negative.
    #[error("invalid limit {0}: must be a positive integer")]
    InvalidLimit(i64),
}
