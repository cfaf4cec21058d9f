//! Phase correction applied to the truncated spectrum

use crate::DctFloat;
use rustfft::num_complex::Complex;

/// `scale * exp(-i*pi*k / (2N))` for `k = 0..len`
///
/// `len` is the DCT length N, not the FFT length.
pub fn phase_correction<T: DctFloat>(len: usize, scale: f64) -> Vec<Complex<T>> {
    (0..len)
        .map(|k| {
            let angle = -std::f64::consts::PI * k as f64 / (2 * len) as f64;
            let (sin, cos) = angle.sin_cos();
            Complex::new(
                T::from_f64_lossy(scale * cos),
                T::from_f64_lossy(scale * sin),
            )
        })
        .collect()
}

/// `output[k] = Re(spectrum[k] * twiddles[k])`
///
/// Bins past `twiddles.len()` are ignored, which is how the doubled
/// strategies discard the upper half of their 2N-point spectrum.
#[inline]
pub fn apply_phase_correction<T: DctFloat>(
    spectrum: &[Complex<T>],
    twiddles: &[Complex<T>],
    output: &mut [T],
) {
    for ((dst, &bin), &twiddle) in output.iter_mut().zip(spectrum).zip(twiddles) {
        *dst = bin.re * twiddle.re - bin.im * twiddle.im;
    }
}
