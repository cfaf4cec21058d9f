//! Sample types accepted by the transforms

use rustfft::FftNum;

/// Floating point sample type usable with every strategy
///
/// Angles and the direct evaluation are computed in `f64` and narrowed once,
/// so single precision results only lose accuracy inside the FFT itself.
pub trait DctFloat: FftNum + num_traits::Float + Into<f64> {
    /// Absolute per-element tolerance used when validating results
    const TOLERANCE: Self;

    fn from_f64_lossy(value: f64) -> Self;
}

impl DctFloat for f32 {
    const TOLERANCE: Self = dctfft_core::consts::DEFAULT_TOLERANCE_F32;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl DctFloat for f64 {
    const TOLERANCE: Self = dctfft_core::consts::DEFAULT_TOLERANCE;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}
