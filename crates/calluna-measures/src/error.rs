//! Error types for series validation.

/// Errors from time series validation.
///
/// The configuration protocol itself has no error conditions — absent
/// parameters fall back to defaults and unrecognized ones are carried
/// through — so the only failures this crate produces are rejected series.
/// Kernel failures propagate from the caller's kernel unmodified.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },
}
