//! Display and trait implementations for Error
//!
//! | format   | verbosity            |
//! |----------|----------------------|
//! | `{}`     | [`Verbosity::Compact`] |
//! | `{:?}`   | [`Verbosity::Quoted`]  |
//! | `{:#}`   | [`Verbosity::Verbose`] |
//! | `{:#?}`  | [`Verbosity::Verbose`] |

use super::types::{Cause, Error};
use std::fmt;

/// How much of an error to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// Plain message including causes, `"top: middle: bottom"`
    Compact,
    /// Plain message in double quotes with escapes
    Quoted,
    /// Plain message, then this layer's call path one frame per two lines
    Verbose,
}

impl Error {
    /// Render this error at the requested verbosity.
    ///
    /// Verbose output only includes the path captured for this layer, never
    /// the paths of its causes. Without a path it equals the compact form,
    /// with no trailing newline.
    pub fn render(&self, verbosity: Verbosity, w: &mut dyn fmt::Write) -> fmt::Result {
        match verbosity {
            Verbosity::Compact => self.write_message(w),
            Verbosity::Quoted => write!(w, "{:?}", self.to_string()),
            Verbosity::Verbose => {
                self.write_message(w)?;
                if let Some(path) = &self.inner.path {
                    w.write_char('\n')?;
                    path.render(w)?;
                }
                Ok(())
            }
        }
    }

    /// `Display` adaptor for a fixed verbosity
    #[must_use]
    pub fn rendered(&self, verbosity: Verbosity) -> Rendered<'_> {
        Rendered {
            error: self,
            verbosity,
        }
    }

    fn write_message(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        match &self.inner.cause {
            Cause::None => w.write_str(&self.inner.message),
            Cause::Wrapped(cause) => write!(w, "{}: {cause}", self.inner.message),
            Cause::Joined(causes) => {
                for (i, cause) in causes.iter().enumerate() {
                    if i > 0 {
                        w.write_char('\n')?;
                    }
                    write!(w, "{cause}")?;
                }
                Ok(())
            }
        }
    }
}

/// An [`Error`] paired with the verbosity to display it at
#[derive(Clone, Copy)]
pub struct Rendered<'a> {
    error: &'a Error,
    verbosity: Verbosity,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.render(self.verbosity, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbosity = if f.alternate() {
            Verbosity::Verbose
        } else {
            Verbosity::Compact
        };
        self.render(verbosity, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbosity = if f.alternate() {
            Verbosity::Verbose
        } else {
            Verbosity::Quoted
        };
        self.render(verbosity, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.cause {
            Cause::Wrapped(cause) => Some(&**cause as &(dyn std::error::Error + 'static)),
            Cause::None | Cause::Joined(_) => None,
        }
    }
}
