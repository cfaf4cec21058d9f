//! Error types for DCT-via-FFT operations

use thiserror::Error;

/// Result type for DCT operations
pub type DctResult<T> = Result<T, DctError>;

/// Errors that can occur while planning, executing or comparing transforms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DctError {
    #[error("DCT-II is undefined for an empty sequence")]
    EmptySequence,

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("FFT buffer length mismatch: planned for {expected}, got {actual}")]
    FftLengthMismatch { expected: usize, actual: usize },

    #[error("Sample value {0} is not representable in the sample type")]
    SampleConversion(usize),

    #[error("Invalid precision: {0} digits (at most {max} supported)", max = crate::consts::MAX_DIGITS)]
    InvalidPrecision(u32),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown FFT backend: {0}")]
    UnknownBackend(String),

    #[error(
        "Numerical mismatch between {subject} and {reference} at index {index}: \
         expected {expected}, got {actual} (tolerance {tolerance})"
    )]
    NumericalMismatch {
        subject: String,
        reference: String,
        index: usize,
        expected: f64,
        actual: f64,
        tolerance: f64,
    },
}
