use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lcs_diff::{Comparison, DiffError, LineEnding, LineSource};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// In-memory source that records every path it was asked for.
#[derive(Default)]
struct RecordingSource {
    files: HashMap<PathBuf, String>,
    reads: Mutex<Vec<PathBuf>>,
}

impl RecordingSource {
    fn with(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), text.to_string());
        self
    }

    fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl LineSource for RecordingSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

#[test]
fn no_targets_is_reported_before_any_read() {
    let source = RecordingSource::default().with("orig.txt", "a");
    let comparison = Comparison::new().with_source(&source);
    let result = comparison.run("orig.txt", &[] as &[&str]);
    assert!(matches!(result, Err(DiffError::NoTargets)));
    assert!(source.reads().is_empty());
}

#[test]
fn failing_target_aborts_the_whole_batch() {
    let source = RecordingSource::default()
        .with("orig.txt", "a\nb")
        .with("one.txt", "a")
        .with("three.txt", "b");
    let comparison = Comparison::new()
        .with_source(&source)
        .with_line_ending(LineEnding::Lf);

    let err = comparison
        .run("orig.txt", &["one.txt", "two.txt", "three.txt"])
        .unwrap_err();
    match err {
        DiffError::Io { path, source } => {
            assert_eq!(path, PathBuf::from("two.txt"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    // Sequential: nothing after the failing target is read.
    assert_eq!(
        source.reads(),
        vec![
            PathBuf::from("orig.txt"),
            PathBuf::from("one.txt"),
            PathBuf::from("two.txt"),
        ]
    );
}

#[test]
fn missing_original_is_an_io_error() {
    let source = RecordingSource::default().with("one.txt", "a");
    let err = Comparison::new()
        .with_source(&source)
        .run("orig.txt", &["one.txt"])
        .unwrap_err();
    assert!(matches!(err, DiffError::Io { ref path, .. } if path == Path::new("orig.txt")));
}

#[test]
fn diffs_follow_target_order() {
    let source = RecordingSource::default()
        .with("orig.txt", "a\nb\nc")
        .with("first.txt", "a\nc")
        .with("second.txt", "a\nb\nc\nd");
    let diffs = Comparison::new()
        .with_source(&source)
        .with_line_ending(LineEnding::Lf)
        .run("orig.txt", &["first.txt", "second.txt"])
        .unwrap();

    assert_eq!(diffs.len(), 2);
    assert_eq!(diffs[0].target(), Path::new("first.txt"));
    assert_eq!(diffs[0].lcs_len(), 2);
    assert_eq!(diffs[1].target(), Path::new("second.txt"));
    assert_eq!(
        diffs[1].to_string(),
        "DIFF\nFile 1: 'orig.txt'. File 2: 'second.txt'\n1   a\n2   b\n3   c\n4 + d\n"
    );
}

#[test]
fn reads_files_from_disk() {
    let dir = TempDir::new().unwrap();
    let orig = dir.path().join("orig.txt");
    let target = dir.path().join("target.txt");
    fs::write(&orig, "keep\nold\nkeep too\n").unwrap();
    fs::write(&target, "keep\nnew\nkeep too\n").unwrap();

    let diffs = Comparison::new()
        .with_line_ending(LineEnding::Lf)
        .run(&orig, &[&target])
        .unwrap();
    let diff = &diffs[0];

    // The trailing delimiter yields a final empty line on both sides.
    assert_eq!(diff.old_lines(), ["keep", "old", "keep too", ""]);
    let rendered: Vec<String> = diff
        .to_string()
        .lines()
        .skip(2)
        .map(str::to_owned)
        .collect();
    assert_eq!(
        rendered,
        vec!["1   keep", "2 * old | new", "3   keep too", "4   "]
    );
    assert_eq!(diff.summary().replaced, 1);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    let orig = dir.path().join("orig.txt");
    let target = dir.path().join("target.txt");
    fs::write(&orig, b"caf\xe9\nx").unwrap();
    fs::write(&target, b"caf\xe9\ny").unwrap();

    let diffs = Comparison::new()
        .with_line_ending(LineEnding::Lf)
        .run(&orig, &[&target])
        .unwrap();
    let diff = &diffs[0];

    assert_eq!(diff.old_lines(), ["caf\u{fffd}", "x"]);
    assert_eq!(diff.new_lines(), ["caf\u{fffd}", "y"]);
    assert_eq!(diff.lcs_len(), 1);
    assert_eq!(diff.summary().replaced, 1);
}

#[test]
fn file_diff_reports_split_stats_and_summary() {
    let source = RecordingSource::default()
        .with("orig.txt", "a\nb\nc\nd")
        .with("target.txt", "a\nx\nc");
    let diffs = Comparison::new()
        .with_source(&source)
        .with_line_ending(LineEnding::Lf)
        .run("orig.txt", &["target.txt"])
        .unwrap();
    let diff = &diffs[0];

    let stats = diff.split_stats();
    assert!(stats.row_cells >= 4 * (diff.new_lines().len() + 1));
    assert!(stats.max_depth >= 1);

    let summary = diff.summary();
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.replaced, 1);
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.total(), 4);
}
