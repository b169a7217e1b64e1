//! Index-range views used by the splitter.
//!
//! A `Window` names one Hirschberg sub-problem as a pair of half-open ranges
//! into the original `x` and `y` slices, so recursion never copies elements.

use std::ops::Range;

/// Sub-problem `x[x.start..x.end]` against `y[y.start..y.end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Range into the outer sequence `x`.
    pub x: Range<usize>,
    /// Range into the inner sequence `y`.
    pub y: Range<usize>,
}

impl Window {
    /// Window covering both sequences completely.
    pub fn full(x_len: usize, y_len: usize) -> Self {
        Self {
            x: 0..x_len,
            y: 0..y_len,
        }
    }

    /// Number of `x` elements in the window.
    #[inline]
    pub fn x_len(&self) -> usize {
        self.x.end.saturating_sub(self.x.start)
    }

    /// Number of `y` elements in the window.
    #[inline]
    pub fn y_len(&self) -> usize {
        self.y.end.saturating_sub(self.y.start)
    }

    /// Returns true if either side is empty, i.e. the LCS is trivially empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_len() == 0 || self.y_len() == 0
    }

    /// Split at `x` offset `xi` and `y` offset `yj` (both relative to the window).
    ///
    /// Returns the `(front, back)` windows: `x[..xi] × y[..yj]` and
    /// `x[xi..] × y[yj..]`.
    pub fn split(&self, xi: usize, yj: usize) -> (Window, Window) {
        debug_assert!(xi <= self.x_len() && yj <= self.y_len());
        let xm = self.x.start + xi;
        let ym = self.y.start + yj;
        (
            Window {
                x: self.x.start..xm,
                y: self.y.start..ym,
            },
            Window {
                x: xm..self.x.end,
                y: ym..self.y.end,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Window;

    #[test]
    fn zero_length_window_is_empty() {
        let w = Window { x: 5..5, y: 0..3 };
        assert_eq!(w.x_len(), 0);
        assert!(w.is_empty());
        assert!(Window::full(4, 0).is_empty());
    }

    #[test]
    fn typical_window_len() {
        let w = Window { x: 2..7, y: 1..4 };
        assert_eq!(w.x_len(), 5);
        assert_eq!(w.y_len(), 3);
        assert!(!w.is_empty());
    }

    #[test]
    fn split_is_relative_to_window_start() {
        let w = Window { x: 2..7, y: 1..4 };
        let (front, back) = w.split(2, 0);
        assert_eq!(front, Window { x: 2..4, y: 1..1 });
        assert_eq!(back, Window { x: 4..7, y: 1..4 });
    }
}
