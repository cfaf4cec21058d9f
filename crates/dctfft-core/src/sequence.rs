//! Validated input sequences

use crate::{DctError, DctResult};
use std::ops::Deref;

/// An immutable, non-empty sequence of real samples
///
/// DCT-II is undefined for N = 0, so construction rejects empty input and
/// every transform taking a `Sequence` can skip that check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence<T> {
    samples: Vec<T>,
}

impl<T: Copy> Sequence<T> {
    pub fn new(samples: Vec<T>) -> DctResult<Self> {
        if samples.is_empty() {
            return Err(DctError::EmptySequence);
        }
        Ok(Self { samples })
    }

    pub fn from_slice(samples: &[T]) -> DctResult<Self> {
        Self::new(samples.to_vec())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    pub fn into_inner(self) -> Vec<T> {
        self.samples
    }
}

impl<T: num_traits::Float> Sequence<T> {
    /// `1, 2, ..., len`, the ramp used throughout the comparison tooling
    pub fn ramp(len: usize) -> DctResult<Self> {
        let samples = (1..=len)
            .map(|i| T::from(i).ok_or(DctError::SampleConversion(i)))
            .collect::<DctResult<Vec<_>>>()?;
        Self::new(samples)
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Copy> TryFrom<Vec<T>> for Sequence<T> {
    type Error = DctError;

    fn try_from(samples: Vec<T>) -> DctResult<Self> {
        Self::new(samples)
    }
}

impl<T: Copy> TryFrom<&[T]> for Sequence<T> {
    type Error = DctError;

    fn try_from(samples: &[T]) -> DctResult<Self> {
        Self::from_slice(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(Sequence::<f64>::new(Vec::new()), Err(DctError::EmptySequence));
        assert!(Sequence::<f32>::try_from(&[][..]).is_err());
    }

    #[test]
    fn test_single_sample_accepted() {
        let seq = Sequence::new(vec![5.0f64]).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], 5.0);
    }

    #[test]
    fn test_ramp() {
        let seq = Sequence::<f64>::ramp(4).unwrap();
        assert_eq!(seq.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Sequence::<f64>::ramp(0), Err(DctError::EmptySequence));
    }

    #[test]
    fn test_ramp_single_precision_is_exact() {
        let seq = Sequence::<f32>::ramp(1000).unwrap();
        assert_eq!(seq[0], 1.0);
        assert_eq!(seq[999], 1000.0);
    }

    #[test]
    fn test_conversion_error_names_the_value() {
        assert_eq!(
            DctError::SampleConversion(17).to_string(),
            "Sample value 17 is not representable in the sample type"
        );
        assert_ne!(
            DctError::SampleConversion(4),
            DctError::LengthMismatch { expected: 4, actual: 4 }
        );
    }
}
