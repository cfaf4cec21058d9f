//! Reusable DCT-II plans
//!
//! A plan fixes the strategy, the sequence length and the FFT backend, and
//! precomputes everything that depends only on those: the FFT itself, the
//! phase-correction vector and, for the even/odd strategy, the permutation.
//! Executing a plan allocates fresh scratch, so a plan carries no state
//! between calls and can be shared across threads.

use crate::{
    apply_phase_correction, even_odd_order, gather, make_forward_fft, mirror_extend,
    phase_correction, zero_pad_extend, DctFloat, FftBackend, FftPrimitive, Strategy,
};
use dctfft_core::{DctError, DctResult, Sequence};
use rustfft::num_complex::Complex;
use std::sync::Arc;

/// Anything that computes an in-place DCT-II of a fixed length
pub trait Dct2Executor<T>: Send + Sync {
    /// Transform `data` in place
    ///
    /// `data.len()` must be a non-zero multiple of [`Dct2Executor::length`];
    /// each consecutive chunk is transformed independently.
    fn execute(&self, data: &mut [T]) -> DctResult<()>;

    /// Sequence length this executor was built for
    fn length(&self) -> usize;

    /// Short label used in reports and logs
    fn name(&self) -> &'static str;
}

pub(crate) fn check_chunked_length(length: usize, actual: usize) -> DctResult<()> {
    if actual == 0 {
        return Err(DctError::EmptySequence);
    }
    if actual % length != 0 {
        return Err(DctError::LengthMismatch {
            expected: length,
            actual,
        });
    }
    Ok(())
}

/// DCT-II of a fixed length computed by one [`Strategy`]
pub struct Dct2Plan<T: DctFloat> {
    strategy: Strategy,
    backend: FftBackend,
    length: usize,
    fft: Arc<dyn FftPrimitive<T>>,
    twiddles: Vec<Complex<T>>,
    order: Vec<usize>,
}

impl<T: DctFloat> Dct2Plan<T> {
    /// Plan on the default FFT backend
    pub fn new(strategy: Strategy, length: usize) -> DctResult<Self> {
        Self::with_backend(strategy, length, FftBackend::default())
    }

    pub fn with_backend(strategy: Strategy, length: usize, backend: FftBackend) -> DctResult<Self> {
        if length == 0 {
            return Err(DctError::EmptySequence);
        }

        let fft_len = strategy.fft_len(length);
        let fft = make_forward_fft(fft_len, backend)?;
        let twiddles = phase_correction(length, strategy.phase_scale());
        let order = match strategy {
            Strategy::EvenOdd => even_odd_order(length),
            Strategy::MirrorDouble | Strategy::ZeroPadDouble => Vec::new(),
        };

        tracing::debug!(%strategy, %backend, length, fft_len, "planned DCT-II");

        Ok(Self {
            strategy,
            backend,
            length,
            fft,
            twiddles,
            order,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn backend(&self) -> FftBackend {
        self.backend
    }

    pub fn fft_length(&self) -> usize {
        self.fft.size()
    }

    /// Transform a sequence into a freshly allocated result
    pub fn process(&self, input: &Sequence<T>) -> DctResult<Vec<T>> {
        if input.len() != self.length {
            return Err(DctError::LengthMismatch {
                expected: self.length,
                actual: input.len(),
            });
        }
        let mut output = input.to_vec();
        self.execute(&mut output)?;
        Ok(output)
    }

    fn load(&self, chunk: &[T], scratch: &mut [Complex<T>]) {
        match self.strategy {
            Strategy::MirrorDouble => mirror_extend(chunk, scratch),
            Strategy::ZeroPadDouble => zero_pad_extend(chunk, scratch),
            Strategy::EvenOdd => gather(chunk, &self.order, scratch),
        }
    }
}

impl<T: DctFloat> Dct2Executor<T> for Dct2Plan<T> {
    fn execute(&self, data: &mut [T]) -> DctResult<()> {
        check_chunked_length(self.length, data.len())?;

        let mut scratch = vec![Complex::new(T::zero(), T::zero()); self.fft.size()];

        for chunk in data.chunks_exact_mut(self.length) {
            self.load(chunk, &mut scratch);
            self.fft.process(&mut scratch)?;
            apply_phase_correction(&scratch, &self.twiddles, chunk);
        }

        tracing::trace!(strategy = %self.strategy, samples = data.len(), "executed DCT-II");
        Ok(())
    }

    fn length(&self) -> usize {
        self.length
    }

    fn name(&self) -> &'static str {
        self.strategy.name()
    }
}
