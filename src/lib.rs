//! Line diffs over a linear-space longest common subsequence.
//!
//! This crate compares two ordered sequences (typically the lines of two text
//! files) by computing a longest common subsequence with Hirschberg's
//! divide-and-conquer algorithm and aligning both inputs against it.
//!
//! ## Core idea
//! 1. The [`row`] engine computes one row of the LCS length table in
//!    `O(|y|)` space.
//! 2. The [`Hirschberg`] splitter halves `x`, uses a forward and a backward row
//!    to find where an optimal path crosses the middle, and recurses on index
//!    windows. The full `|x| × |y|` table is never built, so large files stay
//!    within `O(|y|)` row memory.
//! 3. The [`align()`] pass walks `x`, `y` and the LCS once and emits
//!    [`DiffOp`]s: `Match`, `Replace`, `Delete`, `Insert`.
//!
//! Ties between equally long subsequences are broken by the leftmost optimal
//! split, so results are reproducible run to run.
//!
//! ## Quick start
//! ```
//! use lcs_diff::{diff, lcs, render::write_ops};
//!
//! let x = ["a", "b", "c"];
//! let y = ["a", "c"];
//! assert_eq!(lcs(&x, &y), vec![&"a", &"c"]);
//!
//! let mut out = Vec::new();
//! write_ops(&mut out, diff(&x, &y)).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1   a\n2 - b\n3   c\n");
//! ```
//!
//! ## Files
//! [`Comparison`] loads an original file and one or more targets through a
//! [`LineSource`], splits them on a [`LineEnding`], and returns one
//! [`FileDiff`] per target. The `lcsdiff` binary (feature `cli`) wraps it.
//!
//! ## Features
//! - `tracing` (default): spans and events from the splitter and the driver.
//! - `cli` (default): the `lcsdiff` command.
//! - `parallel`: computes the two row profiles of large splits with rayon.
//! - `probe`: the `scale_probe` measurement binary.

pub mod align;
pub mod builder;
pub mod compare;
pub mod error;
pub mod hirschberg;
pub mod loader;
pub mod render;
pub mod row;
pub mod traits;
pub mod utils;
pub mod window;

pub use crate::align::{align, diff, diff_with, Alignment, DiffOp};
pub use crate::builder::HirschbergBuilder;
pub use crate::compare::{compare, Comparison, DiffSummary, FileDiff};
pub use crate::error::DiffError;
pub use crate::hirschberg::{lcs, lcs_pairs, Hirschberg, SplitStats};
pub use crate::loader::{split_lines, FsSource, LineEnding};
pub use crate::traits::{Element, LineSource};
