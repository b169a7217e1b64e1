//! Hirschberg splitter: a longest common subsequence in linear space.
//!
//! The outer sequence `x` is halved at `i = |x| / 2`. One forward DP row
//! (`x[..i]` against every prefix of `y`) and one backward row (`x[i..]`
//! against every suffix of `y`) locate the column `j` where an optimal path
//! crosses the middle, and the two halves `x[..i] × y[..j]` and
//! `x[i..] × y[j..]` are solved recursively.
//!
//! ## Tie-break
//! Several columns can attain the best `forward[j] + backward[j]`. The scan runs
//! over `j` ascending and only moves on a strictly greater sum, so the leftmost
//! optimal column wins. The resulting LCS is therefore fully deterministic,
//! though other correct LCS implementations may legitimately pick a different
//! subsequence of the same length.
//!
//! ## Space
//! Sub-problems are [`Window`]s of index ranges into the caller's slices. The
//! four DP rows (a `prev`/`curr` pair per direction) are allocated once with
//! width `|y| + 1` and reused at every level, and they are released before the
//! splitter recurses. Auxiliary memory is therefore `O(|y|)` cells plus
//! `O(log |x|)` stack frames, independent of how the recursion unfolds.

use crate::row::{lcs_row, lcs_row_into, lcs_row_rev_into, RowBuffers};
use crate::traits::Element;
use crate::utils::DEFAULT_PARALLEL_THRESHOLD;
use crate::window::Window;

/// Counters collected while splitting; used to check the space bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Deepest recursion frame reached (the root frame has depth 1).
    pub max_depth: usize,
    /// Number of general-case splits performed.
    pub splits: usize,
    /// DP row cells allocated for the whole run.
    pub row_cells: usize,
}

/// Configured LCS solver.
///
/// ```
/// use lcs_diff::Hirschberg;
///
/// let x = ["a", "b", "c"];
/// let y = ["a", "c"];
/// let lcs = Hirschberg::new().lcs(&x, &y);
/// assert_eq!(lcs, vec![&"a", &"c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Hirschberg {
    parallel_threshold: usize,
}

impl Default for Hirschberg {
    fn default() -> Self {
        Self::new()
    }
}

impl Hirschberg {
    /// Solver with the default parallel threshold.
    pub fn new() -> Self {
        Self::with_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Solver that overlaps the two row profiles of a split once
    /// `|x_front| · |y|` reaches `threshold`. Only used with the `parallel`
    /// feature; the result never depends on it.
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        Self {
            parallel_threshold: threshold,
        }
    }

    /// Return the configured parallel threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Canonical LCS of `x` and `y` as references into `x`.
    pub fn lcs<'a, T: Element>(&self, x: &'a [T], y: &[T]) -> Vec<&'a T> {
        self.lcs_pairs(x, y).into_iter().map(|(i, _)| &x[i]).collect()
    }

    /// Canonical LCS as matched index pairs `(i, j)` with `x[i] == y[j]`,
    /// strictly increasing in both coordinates.
    pub fn lcs_pairs<T: Element>(&self, x: &[T], y: &[T]) -> Vec<(usize, usize)> {
        self.run(x, y).0
    }

    /// LCS length only; a single forward row, no reconstruction.
    pub fn lcs_len<T: Element>(&self, x: &[T], y: &[T]) -> usize {
        *lcs_row(x, y).last().unwrap_or(&0) as usize
    }

    /// Solve and also report [`SplitStats`] for the run.
    pub fn run<T: Element>(&self, x: &[T], y: &[T]) -> (Vec<(usize, usize)>, SplitStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("hirschberg", x_len = x.len(), y_len = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let width = y.len() + 1;
        let mut splitter = Splitter {
            x,
            y,
            fwd: RowBuffers::with_width(width),
            bwd: RowBuffers::with_width(width),
            pairs: Vec::with_capacity(x.len().min(y.len())),
            stats: SplitStats::default(),
            parallel_threshold: self.parallel_threshold,
        };
        splitter.split(Window::full(x.len(), y.len()), 1);

        let mut stats = splitter.stats;
        stats.row_cells = splitter.fwd.cells() + splitter.bwd.cells();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            lcs_len = splitter.pairs.len(),
            splits = stats.splits,
            max_depth = stats.max_depth,
            "lcs complete"
        );

        (splitter.pairs, stats)
    }
}

/// Canonical LCS of `x` and `y` with the default configuration.
pub fn lcs<'a, T: Element>(x: &'a [T], y: &[T]) -> Vec<&'a T> {
    Hirschberg::new().lcs(x, y)
}

/// Canonical LCS index pairs with the default configuration.
pub fn lcs_pairs<T: Element>(x: &[T], y: &[T]) -> Vec<(usize, usize)> {
    Hirschberg::new().lcs_pairs(x, y)
}

struct Splitter<'a, T> {
    x: &'a [T],
    y: &'a [T],
    fwd: RowBuffers,
    bwd: RowBuffers,
    pairs: Vec<(usize, usize)>,
    stats: SplitStats,
    parallel_threshold: usize,
}

impl<'a, T: Element> Splitter<'a, T> {
    /// Append the LCS of `window` to `self.pairs`.
    fn split(&mut self, window: Window, depth: usize) {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if window.is_empty() {
            return;
        }

        let (x, y) = (self.x, self.y);
        if window.x_len() == 1 {
            let xi = window.x.start;
            if let Some(offset) = y[window.y.clone()].iter().position(|e| *e == x[xi]) {
                self.pairs.push((xi, window.y.start + offset));
            }
            return;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("split", depth, x = ?window.x, y = ?window.y);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.stats.splits += 1;
        let mid = window.x_len() / 2;
        let col = self.best_column(&window, mid);
        let (front, back) = window.split(mid, col);
        self.split(front, depth + 1);
        self.split(back, depth + 1);
    }

    /// Leftmost column `j` maximising `forward[j] + backward[j]`.
    fn best_column(&mut self, window: &Window, mid: usize) -> usize {
        let (xb, xe) = self.x[window.x.clone()].split_at(mid);
        let ys = &self.y[window.y.clone()];
        let (fwd, bwd) = profiles(
            xb,
            xe,
            ys,
            &mut self.fwd,
            &mut self.bwd,
            self.parallel_threshold,
        );

        // bwd is indexed by suffix length, so the suffix starting at k is bwd[len - k]
        let len = ys.len();
        let mut best_col = 0usize;
        let mut best_sum = 0u32;
        for k in 0..=len {
            let sum = fwd[k] + bwd[len - k];
            if sum > best_sum {
                best_sum = sum;
                best_col = k;
            }
        }
        best_col
    }
}

#[cfg(feature = "parallel")]
fn profiles<'r, T: Element>(
    xb: &[T],
    xe: &[T],
    y: &[T],
    fwd: &'r mut RowBuffers,
    bwd: &'r mut RowBuffers,
    threshold: usize,
) -> (&'r [u32], &'r [u32]) {
    if xb.len().saturating_mul(y.len()) >= threshold {
        rayon::join(
            move || lcs_row_into(xb, y, fwd),
            move || lcs_row_rev_into(xe, y, bwd),
        )
    } else {
        (lcs_row_into(xb, y, fwd), lcs_row_rev_into(xe, y, bwd))
    }
}

#[cfg(not(feature = "parallel"))]
fn profiles<'r, T: Element>(
    xb: &[T],
    xe: &[T],
    y: &[T],
    fwd: &'r mut RowBuffers,
    bwd: &'r mut RowBuffers,
    _threshold: usize,
) -> (&'r [u32], &'r [u32]) {
    (lcs_row_into(xb, y, fwd), lcs_row_rev_into(xe, y, bwd))
}
