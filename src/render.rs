//! Plain-text rendering of an op stream.
//!
//! Each op becomes one line prefixed with its 1-based line number:
//!
//! ```text
//! 1   unchanged
//! 2 - only in x
//! 3 + only in y
//! 4 * x element | y element
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::align::DiffOp;

/// An op paired with the line number it is printed at.
#[derive(Debug, PartialEq, Eq)]
pub struct Numbered<'a, T> {
    pub line: usize,
    pub op: DiffOp<'a, T>,
}

impl<T: fmt::Display> fmt::Display for Numbered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            DiffOp::Match(e) => write!(f, "{}   {}", self.line, e),
            DiffOp::Delete(e) => write!(f, "{} - {}", self.line, e),
            DiffOp::Insert(e) => write!(f, "{} + {}", self.line, e),
            DiffOp::Replace(a, b) => write!(f, "{} * {} | {}", self.line, a, b),
        }
    }
}

/// Number ops from 1 in stream order.
pub fn numbered<'a, T, I>(ops: I) -> impl Iterator<Item = Numbered<'a, T>>
where
    T: 'a,
    I: IntoIterator<Item = DiffOp<'a, T>>,
{
    ops.into_iter()
        .enumerate()
        .map(|(idx, op)| Numbered { line: idx + 1, op })
}

/// Write one rendered line per op.
pub fn write_ops<'a, T, I, W>(out: &mut W, ops: I) -> io::Result<()>
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = DiffOp<'a, T>>,
    W: Write + ?Sized,
{
    for line in numbered(ops) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
