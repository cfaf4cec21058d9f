//! Parallel evaluation of many independent sequences

use crate::{Dct2Plan, DctFloat, FftBackend, Strategy};
use dctfft_core::{DctResult, Sequence};
use rayon::prelude::*;

/// DCT-II of every input with one strategy, computed in parallel
///
/// Inputs may have different lengths; one plan is built per input. The
/// output order matches the input order and the first error wins.
pub fn transform_batch<T: DctFloat>(
    strategy: Strategy,
    inputs: &[Sequence<T>],
    backend: FftBackend,
) -> DctResult<Vec<Vec<T>>> {
    tracing::debug!(%strategy, %backend, count = inputs.len(), "transforming batch");
    inputs
        .par_iter()
        .map(|input| Dct2Plan::with_backend(strategy, input.len(), backend)?.process(input))
        .collect()
}
