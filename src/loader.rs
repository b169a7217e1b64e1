//! Line loading: read text through a [`LineSource`] and split it into lines.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::error::DiffError;
use crate::traits::LineSource;

/// Delimiter used to split text into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `"\r\n"` on Windows, `"\n"` everywhere else.
    #[default]
    Platform,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = DiffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "platform" | "native" => Ok(Self::Platform),
            "lf" | "unix" => Ok(Self::Lf),
            "crlf" | "windows" => Ok(Self::CrLf),
            _ => Err(DiffError::UnknownLineEnding(value.to_string())),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineEnding::Platform => "platform",
            LineEnding::Lf => "lf",
            LineEnding::CrLf => "crlf",
        })
    }
}

/// Split `text` on `ending`.
///
/// Splitting is exact: text ending with the delimiter yields a trailing empty
/// line, and empty text yields a single empty line.
pub fn split_lines(text: &str, ending: LineEnding) -> Vec<String> {
    text.split(ending.as_str()).map(str::to_owned).collect()
}

/// Reads files from the local filesystem.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl LineSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Load `path` from `source` and split it into lines.
pub fn load_lines<S: LineSource + ?Sized>(
    source: &S,
    path: &Path,
    ending: LineEnding,
) -> Result<Vec<String>, DiffError> {
    let text = source
        .read_to_string(path)
        .map_err(|err| DiffError::io(path, err))?;
    Ok(split_lines(&text, ending))
}
