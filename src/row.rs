//! DP-row engine: one row of the LCS length table in linear space.
//!
//! `row[j]` is the LCS length between the *whole* outer sequence `a` and the
//! prefix `b[..j]` of the inner sequence. Only two rows of width `|b| + 1` are
//! ever live, so the full `|a| × |b|` table is never materialised.
//!
//! The `*_into` variants write into caller-owned [`RowBuffers`] so that the
//! Hirschberg splitter can allocate its rows once and reuse them at every
//! recursion level.

use crate::traits::Element;

/// A reusable `prev`/`curr` pair of DP rows.
#[derive(Clone, Debug, Default)]
pub struct RowBuffers {
    prev: Vec<u32>,
    curr: Vec<u32>,
}

impl RowBuffers {
    /// Buffers able to hold rows of up to `width` cells without reallocating.
    pub fn with_width(width: usize) -> Self {
        Self {
            prev: Vec::with_capacity(width),
            curr: Vec::with_capacity(width),
        }
    }

    /// Number of row cells currently allocated by both buffers.
    #[inline]
    pub fn cells(&self) -> usize {
        self.prev.capacity() + self.curr.capacity()
    }

    fn reset(&mut self, width: usize) {
        self.prev.clear();
        self.prev.resize(width, 0);
        self.curr.clear();
        self.curr.resize(width, 0);
    }
}

/// Compute the last DP row of LCS(a, b).
///
/// Returns a vector `row` of length `|b|+1`, where `row[j] = LCS(a, b[0..j])`.
pub fn lcs_row<T: Element>(a: &[T], b: &[T]) -> Vec<u32> {
    let mut bufs = RowBuffers::with_width(b.len() + 1);
    lcs_row_into(a, b, &mut bufs).to_vec()
}

/// Compute the last DP row of LCS(reverse(a), reverse(b)).
///
/// `row[j]` is the LCS length between `a` and the suffix of `b` of length `j`.
pub fn lcs_row_rev<T: Element>(a: &[T], b: &[T]) -> Vec<u32> {
    let mut bufs = RowBuffers::with_width(b.len() + 1);
    lcs_row_rev_into(a, b, &mut bufs).to_vec()
}

/// Forward row written into `bufs`; the returned slice borrows from them.
pub fn lcs_row_into<'r, T: Element>(a: &[T], b: &[T], bufs: &'r mut RowBuffers) -> &'r [u32] {
    fill_row(a.iter(), b.iter(), b.len() + 1, bufs)
}

/// Reversed row written into `bufs`; both inputs are walked back to front.
pub fn lcs_row_rev_into<'r, T: Element>(
    a: &[T],
    b: &[T],
    bufs: &'r mut RowBuffers,
) -> &'r [u32] {
    fill_row(a.iter().rev(), b.iter().rev(), b.len() + 1, bufs)
}

fn fill_row<'e, 'r, T, A, B>(a: A, b: B, width: usize, bufs: &'r mut RowBuffers) -> &'r [u32]
where
    T: Element + 'e,
    A: Iterator<Item = &'e T>,
    B: Iterator<Item = &'e T> + Clone,
{
    bufs.reset(width);
    for ai in a {
        // curr[0] is never written and stays 0; every other cell is rewritten
        std::mem::swap(&mut bufs.prev, &mut bufs.curr);
        let (prev, curr) = (&bufs.prev, &mut bufs.curr);
        for (j, bj) in b.clone().enumerate() {
            curr[j + 1] = if ai == bj {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
    }
    &bufs.curr[..width]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> Vec<u8> {
        s.bytes().collect()
    }

    #[test]
    fn last_row_basic_cases() {
        assert_eq!(lcs_row(&bytes(""), &bytes("")), vec![0]);
        assert_eq!(lcs_row(&bytes("A"), &bytes("")), vec![0]);
        assert_eq!(lcs_row(&bytes(""), &bytes("A")), vec![0, 0]);
        assert_eq!(lcs_row(&bytes("A"), &bytes("A")), vec![0, 1]);
        assert_eq!(lcs_row(&bytes("A"), &bytes("B")), vec![0, 0]);
    }

    #[test]
    fn empty_outer_yields_zero_row() {
        assert_eq!(lcs_row(&bytes(""), &bytes("ABCD")), vec![0; 5]);
    }

    #[test]
    fn row_counts_prefix_lcs() {
        // a = ABCB, b = BDCAB
        assert_eq!(
            lcs_row(&bytes("ABCB"), &bytes("BDCAB")),
            vec![0, 1, 1, 2, 2, 3]
        );
    }

    #[test]
    fn reversed_row_counts_suffix_lcs() {
        let a = bytes("b");
        let b = bytes("ba");
        // suffixes of b by length: "", "a", "ba"
        assert_eq!(lcs_row_rev(&a, &b), vec![0, 0, 1]);
    }

    #[test]
    fn buffers_are_reused_across_calls() {
        let mut bufs = RowBuffers::with_width(6);
        let cells = bufs.cells();
        let wide = lcs_row_into(&bytes("ABCB"), &bytes("BDCAB"), &mut bufs).to_vec();
        assert_eq!(wide, vec![0, 1, 1, 2, 2, 3]);
        let narrow = lcs_row_into(&bytes("AB"), &bytes("B"), &mut bufs).to_vec();
        assert_eq!(narrow, vec![0, 1]);
        assert_eq!(bufs.cells(), cells);
    }

    #[test]
    fn works_for_string_lines() {
        let a: Vec<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = ["y", "x", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lcs_row(&a, &b), vec![0, 1, 1, 2]);
    }
}
