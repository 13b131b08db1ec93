//! Extension traits for wrapping errors in place

use super::constructors::wrap;
use super::types::{BoxError, Cause, Error};
use crate::path::CallPath;

/// Wrap the error side of a `Result`
pub trait ResultExt<T> {
    /// Wrap `Err(e)` as `wrap(e, message)`
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Wrap `Err(e)` with a message built only on the error path
    fn wrap_err_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Wrap `Err(e)` as `wrap_with_path(e, message)`; the path starts at the
    /// caller of this method
    fn wrap_err_with_path(self, message: impl Into<String>) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| wrap(err, message))
    }

    fn wrap_err_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|err| wrap(err, message()))
    }

    #[inline(never)]
    fn wrap_err_with_path(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                // no closure here: capture skips exactly one frame above itself
                let path = CallPath::capture();
                Err(Error::from_parts(
                    message.into(),
                    Cause::Wrapped(err.into()),
                    path,
                ))
            }
        }
    }
}
