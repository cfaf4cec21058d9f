//! Direct evaluation of DCT-II
//!
//! `X[k] = 2 * sum_{n=0}^{N-1} x[n] * cos(pi/N * (n + 0.5) * k)`
//!
//! Quadratic in N and accumulated in `f64` regardless of the sample type.
//! Used as ground truth for the FFT-based strategies.

use crate::{DctFloat, Dct2Executor};
use dctfft_core::{DctError, DctResult};

/// DCT-II of `input` by the defining formula
pub fn dct2_direct<T: DctFloat>(input: &[T]) -> DctResult<Vec<T>> {
    if input.is_empty() {
        return Err(DctError::EmptySequence);
    }
    let mut output = input.to_vec();
    direct_into(input, &mut output);
    Ok(output)
}

fn direct_into<T: DctFloat>(input: &[T], output: &mut [T]) {
    let n = input.len() as f64;
    for (k, dst) in output.iter_mut().enumerate() {
        let sum: f64 = input
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let angle = std::f64::consts::PI / n * (i as f64 + 0.5) * k as f64;
                Into::<f64>::into(x) * angle.cos()
            })
            .sum();
        *dst = T::from_f64_lossy(2.0 * sum);
    }
}

/// The direct formula behind the [`Dct2Executor`] interface
#[derive(Debug, Clone, Copy)]
pub struct DirectDct2 {
    length: usize,
}

impl DirectDct2 {
    pub fn new(length: usize) -> DctResult<Self> {
        if length == 0 {
            return Err(DctError::EmptySequence);
        }
        Ok(Self { length })
    }
}

impl<T: DctFloat> Dct2Executor<T> for DirectDct2 {
    fn execute(&self, data: &mut [T]) -> DctResult<()> {
        crate::plan::check_chunked_length(self.length, data.len())?;
        for chunk in data.chunks_exact_mut(self.length) {
            let input = chunk.to_vec();
            direct_into(&input, chunk);
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.length
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
