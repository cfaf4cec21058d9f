//! DCT-II through an FFT
//!
//! This crate implements three reductions of the Type-II DCT to a forward
//! complex FFT (mirrored 2N, zero-padded 2N and even/odd reordered N), the
//! direct evaluation used to validate them, reusable plans, and a parallel
//! batch entry point.
//!
//! All strategies assume the FFT primitive computes the unnormalized forward
//! DFT `X[k] = sum x[n] * exp(-2*pi*i*n*k / N)`.

pub mod batch;
pub mod fft;
pub mod float;
pub mod oracle;
pub mod order;
pub mod plan;
pub mod strategy;
pub mod twiddle;

pub use batch::*;
pub use fft::*;
pub use float::*;
pub use oracle::*;
pub use order::*;
pub use plan::*;
pub use strategy::*;
pub use twiddle::*;

pub use rustfft::num_complex::Complex;

use dctfft_core::DctResult;

/// Compute the DCT-II of `input` with the given strategy and the default FFT backend
pub fn dct2<T: DctFloat>(strategy: Strategy, input: &[T]) -> DctResult<Vec<T>> {
    let plan = Dct2Plan::new(strategy, input.len())?;
    let mut output = input.to_vec();
    plan.execute(&mut output)?;
    Ok(output)
}
