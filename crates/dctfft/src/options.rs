//! Comparison configuration

use dctfft_core::consts::{DEFAULT_DIGITS, DEFAULT_TOLERANCE, MAX_DIGITS};
use dctfft_core::{DctError, DctResult};
use dctfft_transform::FftBackend;

/// Options for [`crate::compare_strategies`]
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOptions {
    /// Decimal digits kept when rounding results for display
    pub digits: u32,
    /// Absolute per-element tolerance against the direct result
    pub tolerance: f64,
    /// FFT implementation used by every strategy
    pub backend: FftBackend,
    /// Also check every pair of strategies against each other
    pub cross_validate: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            tolerance: DEFAULT_TOLERANCE,
            backend: FftBackend::default(),
            cross_validate: true,
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn backend(mut self, backend: FftBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn cross_validate(mut self, cross_validate: bool) -> Self {
        self.cross_validate = cross_validate;
        self
    }

    pub fn validate(&self) -> DctResult<()> {
        if self.digits > MAX_DIGITS {
            return Err(DctError::InvalidPrecision(self.digits));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(DctError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
