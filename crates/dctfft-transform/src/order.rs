//! Construction of the FFT input for each strategy
//!
//! The doubled strategies extend the sequence to 2N points, the reordered
//! strategy permutes it in place into N points.

use num_traits::Zero;
use rustfft::num_complex::Complex;

/// Permutation used by the even/odd strategy
///
/// `order[m]` is the input index placed at position `m`: the even indices in
/// forward order, then the odd indices in reverse order. The reversed run
/// starts at `N - 1` for even N and at `N - 2` for odd N.
pub fn even_odd_order(len: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    order.extend((0..len).step_by(2));
    let last_odd = if len % 2 == 0 { len.saturating_sub(1) } else { len.saturating_sub(2) };
    if len > 1 {
        order.extend((1..=last_odd).rev().step_by(2));
    }
    order
}

/// `buffer[m] = input[order[m]]`
pub fn gather<T: Copy + Zero>(input: &[T], order: &[usize], buffer: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), order.len());
    for (dst, &src) in buffer.iter_mut().zip(order) {
        *dst = Complex::new(input[src], T::zero());
    }
}

/// `buffer = input ++ reverse(input)`, buffer length 2N
pub fn mirror_extend<T: Copy + Zero>(input: &[T], buffer: &mut [Complex<T>]) {
    debug_assert_eq!(buffer.len(), 2 * input.len());
    let (head, tail) = buffer.split_at_mut(input.len());
    for (dst, &src) in head.iter_mut().zip(input) {
        *dst = Complex::new(src, T::zero());
    }
    for (dst, &src) in tail.iter_mut().zip(input.iter().rev()) {
        *dst = Complex::new(src, T::zero());
    }
}

/// `buffer = input ++ zeros(N)`, buffer length 2N
pub fn zero_pad_extend<T: Copy + Zero>(input: &[T], buffer: &mut [Complex<T>]) {
    debug_assert_eq!(buffer.len(), 2 * input.len());
    let (head, tail) = buffer.split_at_mut(input.len());
    for (dst, &src) in head.iter_mut().zip(input) {
        *dst = Complex::new(src, T::zero());
    }
    tail.fill(Complex::new(T::zero(), T::zero()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &[usize]) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted.iter().copied().eq(0..order.len())
    }

    #[test]
    fn test_even_odd_order_odd_length() {
        assert_eq!(even_odd_order(1), vec![0]);
        assert_eq!(even_odd_order(3), vec![0, 2, 1]);
        assert_eq!(even_odd_order(5), vec![0, 2, 4, 3, 1]);
        assert_eq!(even_odd_order(7), vec![0, 2, 4, 6, 5, 3, 1]);
    }

    #[test]
    fn test_even_odd_order_even_length() {
        assert_eq!(even_odd_order(2), vec![0, 1]);
        assert_eq!(even_odd_order(4), vec![0, 2, 3, 1]);
        assert_eq!(even_odd_order(8), vec![0, 2, 4, 6, 7, 5, 3, 1]);
    }

    #[test]
    fn test_even_odd_order_is_permutation() {
        assert!(even_odd_order(0).is_empty());
        for len in 1..64 {
            let order = even_odd_order(len);
            assert_eq!(order.len(), len);
            assert!(is_permutation(&order), "not a permutation for {len}");
            // evens occupy the first ceil(N/2) slots
            assert!(order[..len.div_ceil(2)].iter().all(|i| i % 2 == 0));
        }
    }

    #[test]
    fn test_mirror_extend() {
        let mut buffer = vec![Complex::zero(); 6];
        mirror_extend(&[1.0, 2.0, 3.0], &mut buffer);
        let re: Vec<f64> = buffer.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![1.0, 2.0, 3.0, 3.0, 2.0, 1.0]);
        assert!(buffer.iter().all(|c| c.im == 0.0));
    }

    #[test]
    fn test_mirror_extend_single_sample() {
        let mut buffer = vec![Complex::zero(); 2];
        mirror_extend(&[4.0f32], &mut buffer);
        assert_eq!(buffer, vec![Complex::new(4.0, 0.0); 2]);
    }

    #[test]
    fn test_zero_pad_overwrites_stale_tail() {
        let mut buffer = vec![Complex::new(7.0, 7.0); 4];
        zero_pad_extend(&[1.0, 2.0], &mut buffer);
        assert_eq!(
            buffer,
            vec![
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::zero(),
                Complex::zero()
            ]
        );
    }

    #[test]
    fn test_gather() {
        let input = [10.0, 11.0, 12.0, 13.0, 14.0];
        let mut buffer = vec![Complex::zero(); 5];
        gather(&input, &even_odd_order(5), &mut buffer);
        let re: Vec<f64> = buffer.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![10.0, 12.0, 14.0, 13.0, 11.0]);
    }
}
