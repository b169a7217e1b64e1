//! Assorted utilities and helpers.

/// Default `|xb| · |y|` work size above which the `parallel` feature computes
/// the forward and backward profiles of a split on separate rayon workers.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Upper bound on the recursion depth of the splitter for an outer sequence
/// of `x_len` elements: `ceil(log2(x_len)) + 1`, and 1 for `x_len <= 1`.
///
/// Each split halves `x` (the larger half has `ceil(len / 2)` elements), so
/// every root-to-leaf chain has at most this many frames.
#[inline]
pub fn split_depth_bound(x_len: usize) -> usize {
    if x_len <= 1 {
        1
    } else {
        (usize::BITS - (x_len - 1).leading_zeros()) as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::split_depth_bound;

    #[test]
    fn returns_one_for_small_inputs() {
        assert_eq!(split_depth_bound(0), 1);
        assert_eq!(split_depth_bound(1), 1);
    }

    #[test]
    fn ceil_log2_behavior() {
        assert_eq!(split_depth_bound(2), 2);
        assert_eq!(split_depth_bound(3), 3);
        assert_eq!(split_depth_bound(4), 3);
        assert_eq!(split_depth_bound(5), 4);
        assert_eq!(split_depth_bound(1024), 11);
        assert_eq!(split_depth_bound(1025), 12);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0;
        for n in 0..500 {
            let d = split_depth_bound(n);
            assert!(d >= prev, "depth bound decreased at n={n}: {d} < {prev}");
            prev = d;
        }
    }
}
