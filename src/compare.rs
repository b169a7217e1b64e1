//! Batch comparison driver: one original file against one or more targets.
//!
//! The batch contract:
//! - at least one target is required, checked before anything is read;
//! - the original and every target are loaded sequentially and the first
//!   failure aborts the batch, so no diff is produced unless all loads succeed;
//! - diffs are returned in target order.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::align::{align, DiffOp};
use crate::error::DiffError;
use crate::hirschberg::{Hirschberg, SplitStats};
use crate::loader::{load_lines, FsSource, LineEnding};
use crate::render::numbered;
use crate::traits::LineSource;

/// Configured batch comparison.
///
/// ```no_run
/// use lcs_diff::{Comparison, LineEnding};
///
/// let diffs = Comparison::new()
///     .with_line_ending(LineEnding::Lf)
///     .run("old.txt", &["new.txt"])?;
/// for diff in &diffs {
///     println!("{diff}");
/// }
/// # Ok::<(), lcs_diff::DiffError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Comparison<S = FsSource> {
    source: S,
    line_ending: LineEnding,
    splitter: Hirschberg,
}

impl Default for Comparison<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparison<FsSource> {
    /// Compare files on the local filesystem, split on the platform line ending.
    pub fn new() -> Self {
        Self {
            source: FsSource,
            line_ending: LineEnding::Platform,
            splitter: Hirschberg::new(),
        }
    }
}

impl<S: LineSource> Comparison<S> {
    /// Read text through `source` instead.
    pub fn with_source<S2: LineSource>(self, source: S2) -> Comparison<S2> {
        Comparison {
            source,
            line_ending: self.line_ending,
            splitter: self.splitter,
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_splitter(mut self, splitter: Hirschberg) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Compare `original` against every path in `targets`.
    ///
    /// # Errors
    /// [`DiffError::NoTargets`] if `targets` is empty, [`DiffError::Io`] for the
    /// first path that cannot be read.
    pub fn run<O, P>(&self, original: O, targets: &[P]) -> Result<Vec<FileDiff>, DiffError>
    where
        O: AsRef<Path>,
        P: AsRef<Path>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("compare", targets = targets.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if targets.is_empty() {
            return Err(DiffError::NoTargets);
        }

        let original = original.as_ref();
        let old_lines: Arc<[String]> = load_lines(&self.source, original, self.line_ending)?.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %original.display(), lines = old_lines.len(), "loaded original");

        let mut loaded = Vec::with_capacity(targets.len());
        for target in targets {
            let target = target.as_ref();
            let new_lines = load_lines(&self.source, target, self.line_ending)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %target.display(), lines = new_lines.len(), "loaded target");
            loaded.push((target.to_path_buf(), new_lines));
        }

        Ok(loaded
            .into_iter()
            .map(|(target, new_lines)| {
                let (pairs, stats) = self.splitter.run(&old_lines[..], &new_lines[..]);
                FileDiff {
                    original: original.to_path_buf(),
                    target,
                    old_lines: Arc::clone(&old_lines),
                    new_lines,
                    pairs,
                    stats,
                }
            })
            .collect())
    }
}

/// Compare files with the default configuration.
pub fn compare<O, P>(original: O, targets: &[P]) -> Result<Vec<FileDiff>, DiffError>
where
    O: AsRef<Path>,
    P: AsRef<Path>,
{
    Comparison::new().run(original, targets)
}

/// Result of comparing the original against one target.
#[derive(Debug, Clone)]
pub struct FileDiff {
    original: PathBuf,
    target: PathBuf,
    old_lines: Arc<[String]>,
    new_lines: Vec<String>,
    pairs: Vec<(usize, usize)>,
    stats: SplitStats,
}

impl FileDiff {
    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn old_lines(&self) -> &[String] {
        &self.old_lines
    }

    pub fn new_lines(&self) -> &[String] {
        &self.new_lines
    }

    /// The canonical LCS, borrowed from the original's lines.
    pub fn lcs(&self) -> Vec<&String> {
        self.pairs.iter().map(|&(i, _)| &self.old_lines[i]).collect()
    }

    pub fn lcs_len(&self) -> usize {
        self.pairs.len()
    }

    /// Matched `(original, target)` line indices.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn split_stats(&self) -> SplitStats {
        self.stats
    }

    /// The aligned op stream.
    pub fn ops(&self) -> Vec<DiffOp<'_, String>> {
        let lcs = self.lcs();
        align(&self.old_lines[..], &self.new_lines[..], &lcs).collect()
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_ops(&self.ops())
    }

    pub fn is_identical(&self) -> bool {
        self.old_lines.len() == self.new_lines.len() && self.pairs.len() == self.new_lines.len()
    }
}

impl fmt::Display for FileDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DIFF")?;
        writeln!(
            f,
            "File 1: '{}'. File 2: '{}'",
            self.original.display(),
            self.target.display()
        )?;
        for line in numbered(self.ops()) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Op counts of one diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub matched: usize,
    pub replaced: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffSummary {
    pub fn from_ops<T>(ops: &[DiffOp<'_, T>]) -> Self {
        ops.iter().fold(Self::default(), |mut acc, op| {
            match op {
                DiffOp::Match(_) => acc.matched += 1,
                DiffOp::Replace(..) => acc.replaced += 1,
                DiffOp::Delete(_) => acc.deleted += 1,
                DiffOp::Insert(_) => acc.inserted += 1,
            }
            acc
        })
    }

    /// Number of ops, i.e. rendered lines.
    pub fn total(&self) -> usize {
        self.matched + self.replaced + self.deleted + self.inserted
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched, {} replaced, {} deleted, {} inserted",
            self.matched, self.replaced, self.deleted, self.inserted
        )
    }
}
