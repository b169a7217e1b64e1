//! Trait seams of the crate.
//!
//! - [`Element`] is the bound every sequence element must satisfy. It is plain
//!   `PartialEq` normally and additionally `Sync` when the `parallel` feature
//!   lets the splitter share slices across rayon workers.
//! - [`LineSource`] abstracts where the comparison driver reads text from, so
//!   the batch logic can be exercised without touching the filesystem.

use std::io;
use std::path::Path;

/// Element of a sequence that can be diffed.
#[cfg(feature = "parallel")]
pub trait Element: PartialEq + Sync {}

#[cfg(feature = "parallel")]
impl<T: PartialEq + Sync> Element for T {}

/// Element of a sequence that can be diffed.
#[cfg(not(feature = "parallel"))]
pub trait Element: PartialEq {}

#[cfg(not(feature = "parallel"))]
impl<T: PartialEq> Element for T {}

/// Storage the comparison driver loads raw text from.
///
/// Implementations only fetch bytes as UTF-8 text; splitting into lines is
/// done by the caller according to its configured line ending.
pub trait LineSource {
    /// Read the whole content behind `path`.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<S: LineSource + ?Sized> LineSource for &S {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}
