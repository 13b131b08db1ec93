//! Resolved frame view and function display names

use std::fmt;
use std::path::{Path, PathBuf};

/// Name used when an address has no symbol information
pub const UNKNOWN: &str = "<unknown>";

/// One resolved entry of a [`CallPath`](super::CallPath)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFrame {
    name: String,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl ResolvedFrame {
    /// Build a frame from a fully qualified function name.
    ///
    /// The stored name is the display name, see [`display_name`].
    #[must_use]
    pub fn new(qualified_name: &str, file: Option<PathBuf>, line: Option<u32>) -> Self {
        Self {
            name: display_name(qualified_name).to_string(),
            file,
            line,
        }
    }

    /// Frame for an address the symbolizer knows nothing about
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            file: None,
            line: None,
        }
    }

    /// Display name of the enclosing function
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source file, when debug info is available
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Source line, when debug info is available
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

/// Writes `name\n\tfile:line` without a trailing newline.
impl fmt::Display for ResolvedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        f.write_str("\n\t")?;
        match &self.file {
            Some(file) => write!(f, "{}", file.display())?,
            None => f.write_str(UNKNOWN)?,
        }
        write!(f, ":{}", self.line.unwrap_or(0))
    }
}

/// Strip the module path from a demangled function name.
///
/// Splits on `::` outside of angle brackets and keeps the last segment.
/// Closure segments (`{{closure}}`, `{closure#0}`) and generic arguments
/// (`::<u8>`) keep the function they belong to.
///
/// ```
/// use cryypt_errors::path::display_name;
///
/// assert_eq!(display_name("app::db::connect"), "connect");
/// assert_eq!(display_name("app::run::{{closure}}"), "run::{{closure}}");
/// assert_eq!(display_name("<alloc::vec::Vec<T> as core::ops::Drop>::drop"), "drop");
/// ```
#[must_use]
pub fn display_name(qualified: &str) -> &str {
    let bytes = qualified.as_bytes();
    let mut depth = 0usize;
    let mut starts = vec![0usize];
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside fn pointer types is not a closing bracket
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                starts.push(i + 2);
                i += 2;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    let mut chosen = starts.len() - 1;
    while chosen > 0 && qualified[starts[chosen]..].starts_with(&['{', '<'][..]) {
        chosen -= 1;
    }
    &qualified[starts[chosen]..]
}
