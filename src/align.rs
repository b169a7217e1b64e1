//! Diff aligner: turn two sequences plus their LCS into tagged operations.
//!
//! Three cursors walk `x`, `y` and the LCS together in a single forward pass.
//! While LCS elements remain, the current `x` and `y` elements are compared
//! against the next LCS element:
//!
//! | `x[i] == lcs[k]` | `y[j] == lcs[k]` | op                      |
//! |------------------|------------------|-------------------------|
//! | yes              | yes              | `Match`, advance i, j, k |
//! | no               | no               | `Replace`, advance i, j |
//! | no               | yes              | `Delete`, advance i     |
//! | yes              | no               | `Insert`, advance j     |
//!
//! Once the LCS is used up, remaining pairs become `Replace` and the longer
//! tail drains as `Delete` or `Insert`.
//!
//! The aligner trusts `lcs` to be a common subsequence of `x` and `y` and does
//! not verify it. If it is not, the stream still terminates without panicking
//! and still consumes every element of both inputs.
//!
//! Every one of the `|x| + |y| - |lcs|` alignment positions is processed: the
//! stream ends only when both inputs are exhausted. A `Replace` covers two
//! positions at once, so the op count is `n - #Replace`.

use std::borrow::Borrow;
use std::fmt;

use crate::hirschberg::Hirschberg;
use crate::traits::Element;

/// One aligned line of a diff.
#[derive(Debug, PartialEq, Eq)]
pub enum DiffOp<'a, T> {
    /// Element present in both sequences.
    Match(&'a T),
    /// `x` element replaced by a `y` element at the same position.
    Replace(&'a T, &'a T),
    /// Element only in `x`.
    Delete(&'a T),
    /// Element only in `y`.
    Insert(&'a T),
}

impl<T> Clone for DiffOp<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DiffOp<'_, T> {}

impl<'a, T> DiffOp<'a, T> {
    /// The `x` side of the op, if it consumes one.
    pub fn x_side(&self) -> Option<&'a T> {
        match *self {
            DiffOp::Match(e) | DiffOp::Delete(e) | DiffOp::Replace(e, _) => Some(e),
            DiffOp::Insert(_) => None,
        }
    }

    /// The `y` side of the op, if it consumes one.
    pub fn y_side(&self) -> Option<&'a T> {
        match *self {
            DiffOp::Match(e) | DiffOp::Insert(e) | DiffOp::Replace(_, e) => Some(e),
            DiffOp::Delete(_) => None,
        }
    }

    /// Whether the element is common to both sides.
    pub fn is_match(&self) -> bool {
        matches!(self, DiffOp::Match(_))
    }

    /// Single-character marker used by the renderer.
    pub fn symbol(&self) -> char {
        match self {
            DiffOp::Match(_) => ' ',
            DiffOp::Replace(..) => '*',
            DiffOp::Delete(_) => '-',
            DiffOp::Insert(_) => '+',
        }
    }
}

/// Lazy op stream produced by [`align`].
pub struct Alignment<'a, 'l, T, L> {
    x: &'a [T],
    y: &'a [T],
    lcs: &'l [L],
    i: usize,
    j: usize,
    k: usize,
}

impl<T, L> fmt::Debug for Alignment<'_, '_, T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alignment")
            .field("i", &self.i)
            .field("j", &self.j)
            .field("k", &self.k)
            .field("positions", &self.positions())
            .finish()
    }
}

impl<T, L> Alignment<'_, '_, T, L> {
    /// Total alignment positions `n = |x| + |y| - |lcs|`.
    pub fn positions(&self) -> usize {
        (self.x.len() + self.y.len()).saturating_sub(self.lcs.len())
    }
}

impl<'a, T, L> Iterator for Alignment<'a, '_, T, L>
where
    T: PartialEq,
    L: Borrow<T>,
{
    type Item = DiffOp<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = (self.x, self.y);
        let op = match (x.get(self.i), y.get(self.j), self.lcs.get(self.k)) {
            (None, None, _) => return None,
            (Some(a), Some(b), Some(common)) => {
                let common: &T = common.borrow();
                match (a == common, b == common) {
                    (true, true) => {
                        self.k += 1;
                        self.i += 1;
                        self.j += 1;
                        DiffOp::Match(a)
                    }
                    (false, false) => {
                        self.i += 1;
                        self.j += 1;
                        DiffOp::Replace(a, b)
                    }
                    (false, true) => {
                        self.i += 1;
                        DiffOp::Delete(a)
                    }
                    (true, false) => {
                        self.j += 1;
                        DiffOp::Insert(b)
                    }
                }
            }
            (Some(a), Some(b), None) => {
                self.i += 1;
                self.j += 1;
                DiffOp::Replace(a, b)
            }
            (Some(a), None, _) => {
                self.i += 1;
                DiffOp::Delete(a)
            }
            (None, Some(b), _) => {
                self.j += 1;
                DiffOp::Insert(b)
            }
        };
        Some(op)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest_x = self.x.len() - self.i.min(self.x.len());
        let rest_y = self.y.len() - self.j.min(self.y.len());
        (rest_x.max(rest_y), Some(rest_x + rest_y))
    }
}

impl<T: PartialEq, L: Borrow<T>> std::iter::FusedIterator for Alignment<'_, '_, T, L> {}

/// Align `x` and `y` against a precomputed LCS.
///
/// `lcs` may hold references (as returned by [`crate::lcs`]) or owned
/// elements; anything that borrows as `T` works.
pub fn align<'a, 'l, T, L>(x: &'a [T], y: &'a [T], lcs: &'l [L]) -> Alignment<'a, 'l, T, L>
where
    T: PartialEq,
    L: Borrow<T>,
{
    Alignment {
        x,
        y,
        lcs,
        i: 0,
        j: 0,
        k: 0,
    }
}

/// Compute the canonical LCS and the aligned op stream in one call.
///
/// ```
/// use lcs_diff::{diff, DiffOp};
///
/// let x = ["a", "b", "c"];
/// let y = ["a", "c"];
/// assert_eq!(
///     diff(&x, &y),
///     vec![DiffOp::Match(&"a"), DiffOp::Delete(&"b"), DiffOp::Match(&"c")]
/// );
/// ```
pub fn diff<'a, T: Element>(x: &'a [T], y: &'a [T]) -> Vec<DiffOp<'a, T>> {
    diff_with(&Hirschberg::new(), x, y)
}

/// [`diff`] with an explicitly configured solver.
pub fn diff_with<'a, T: Element>(
    solver: &Hirschberg,
    x: &'a [T],
    y: &'a [T],
) -> Vec<DiffOp<'a, T>> {
    let lcs = solver.lcs(x, y);
    align(x, y, &lcs).collect()
}
