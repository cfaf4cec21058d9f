//! Forward FFT primitive consumed by every strategy
//!
//! Convention: `X[k] = sum_{n=0}^{N-1} x[n] * exp(-2*pi*i*n*k / N)`, forward
//! direction, no normalization. The phase-correction constants in
//! [`crate::twiddle`] are only valid under this convention.

use crate::DctFloat;
use dctfft_core::{DctError, DctResult};
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which implementation backs the FFT primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FftBackend {
    /// Planned FFT from `rustfft`, any length
    #[default]
    RustFft,
    /// Direct O(N^2) DFT with the same convention
    Naive,
}

impl FftBackend {
    pub const ALL: [FftBackend; 2] = [FftBackend::RustFft, FftBackend::Naive];

    pub fn name(&self) -> &'static str {
        match self {
            FftBackend::RustFft => "rustfft",
            FftBackend::Naive => "naive",
        }
    }
}

impl fmt::Display for FftBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FftBackend {
    type Err = DctError;

    fn from_str(s: &str) -> DctResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rustfft" | "fft" => Ok(FftBackend::RustFft),
            "naive" | "dft" => Ok(FftBackend::Naive),
            _ => Err(DctError::UnknownBackend(s.to_string())),
        }
    }
}

/// In-place forward complex FFT of a fixed size
pub trait FftPrimitive<T>: Send + Sync {
    /// Transform size this primitive was built for
    fn size(&self) -> usize;

    /// Transform `buffer` in place; its length must equal [`FftPrimitive::size`]
    fn process(&self, buffer: &mut [Complex<T>]) -> DctResult<()>;
}

/// Build a forward FFT of `size` points on the requested backend
pub fn make_forward_fft<T: DctFloat>(
    size: usize,
    backend: FftBackend,
) -> DctResult<Arc<dyn FftPrimitive<T>>> {
    match backend {
        FftBackend::RustFft => Ok(Arc::new(RustFftPrimitive::new(size)?)),
        FftBackend::Naive => Ok(Arc::new(NaiveDft::new(size)?)),
    }
}

fn check_size<T>(expected: usize, buffer: &[Complex<T>]) -> DctResult<()> {
    if buffer.len() != expected {
        return Err(DctError::FftLengthMismatch {
            expected,
            actual: buffer.len(),
        });
    }
    Ok(())
}

/// Forward FFT planned with `rustfft`
pub struct RustFftPrimitive<T: DctFloat> {
    fft: Arc<dyn Fft<T>>,
    size: usize,
}

impl<T: DctFloat> RustFftPrimitive<T> {
    pub fn new(size: usize) -> DctResult<Self> {
        if size == 0 {
            return Err(DctError::EmptySequence);
        }
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Ok(Self { fft, size })
    }
}

impl<T: DctFloat> FftPrimitive<T> for RustFftPrimitive<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn process(&self, buffer: &mut [Complex<T>]) -> DctResult<()> {
        check_size(self.size, buffer)?;
        self.fft.process(buffer);
        Ok(())
    }
}

/// Direct DFT, quadratic in the size
///
/// Shares the convention of [`RustFftPrimitive`] and exists to cross-check it.
pub struct NaiveDft<T> {
    twiddles: Vec<Complex<T>>,
}

impl<T: DctFloat> NaiveDft<T> {
    pub fn new(size: usize) -> DctResult<Self> {
        if size == 0 {
            return Err(DctError::EmptySequence);
        }
        let twiddles = (0..size)
            .map(|m| {
                let angle = -2.0 * std::f64::consts::PI * m as f64 / size as f64;
                let (sin, cos) = angle.sin_cos();
                Complex::new(T::from_f64_lossy(cos), T::from_f64_lossy(sin))
            })
            .collect();
        Ok(Self { twiddles })
    }
}

impl<T: DctFloat> FftPrimitive<T> for NaiveDft<T> {
    fn size(&self) -> usize {
        self.twiddles.len()
    }

    fn process(&self, buffer: &mut [Complex<T>]) -> DctResult<()> {
        let size = self.size();
        check_size(size, buffer)?;

        let input = buffer.to_vec();
        for (k, bin) in buffer.iter_mut().enumerate() {
            let mut acc = Complex::new(T::zero(), T::zero());
            for (n, &x) in input.iter().enumerate() {
                acc = acc + x * self.twiddles[(n * k) % size];
            }
            *bin = acc;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(size: usize, at: usize) -> Vec<Complex<f64>> {
        let mut buffer = vec![Complex::new(0.0, 0.0); size];
        buffer[at] = Complex::new(1.0, 0.0);
        buffer
    }

    #[test]
    fn test_convention_is_unnormalized_forward() {
        // Delayed impulse: X[k] = exp(-2*pi*i*k/N), magnitude 1 (no 1/N scaling)
        for backend in FftBackend::ALL {
            let fft = make_forward_fft::<f64>(6, backend).unwrap();
            let mut buffer = impulse(6, 1);
            fft.process(&mut buffer).unwrap();

            for (k, bin) in buffer.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * k as f64 / 6.0;
                assert!((bin.re - angle.cos()).abs() < 1e-12, "{backend} re at {k}");
                assert!((bin.im - angle.sin()).abs() < 1e-12, "{backend} im at {k}");
            }
        }
    }

    #[test]
    fn test_dc_bin_is_plain_sum() {
        for backend in FftBackend::ALL {
            let fft = make_forward_fft::<f64>(5, backend).unwrap();
            let mut buffer: Vec<_> = (1..=5).map(|v| Complex::new(v as f64, 0.0)).collect();
            fft.process(&mut buffer).unwrap();
            assert!((buffer[0].re - 15.0).abs() < 1e-12);
            assert!(buffer[0].im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_backends_agree() {
        let input: Vec<_> = (0..12)
            .map(|i| Complex::new((i as f64 * 0.7).sin(), (i as f64 * 1.3).cos()))
            .collect();

        let mut fast = input.clone();
        let mut naive = input;
        make_forward_fft::<f64>(12, FftBackend::RustFft)
            .unwrap()
            .process(&mut fast)
            .unwrap();
        make_forward_fft::<f64>(12, FftBackend::Naive)
            .unwrap()
            .process(&mut naive)
            .unwrap();

        for (a, b) in fast.iter().zip(naive.iter()) {
            assert!((a - b).norm() < 1e-10);
        }
    }

    #[test]
    fn test_wrong_buffer_length_rejected() {
        let fft = make_forward_fft::<f32>(4, FftBackend::RustFft).unwrap();
        let mut buffer = vec![Complex::new(0.0f32, 0.0); 3];
        assert_eq!(
            fft.process(&mut buffer),
            Err(DctError::FftLengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(make_forward_fft::<f32>(0, FftBackend::Naive).is_err());
    }

    #[test]
    fn test_backend_names() {
        assert_eq!("rustfft".parse::<FftBackend>().unwrap(), FftBackend::RustFft);
        assert_eq!("Naive".parse::<FftBackend>().unwrap(), FftBackend::Naive);
        assert!("fftw".parse::<FftBackend>().is_err());
    }
}
