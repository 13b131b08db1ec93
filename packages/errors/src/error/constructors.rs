//! Error constructors
//!
//! Every `*_with_path` function calls `CallPath::capture` itself and is
//! `#[inline(never)]`: capture skips exactly one frame above its own, and
//! that frame has to be the public entry point.

use super::types::{BoxError, Cause, Error};
use crate::path::CallPath;
use std::fmt;

/// Create a terminal error
#[must_use]
pub fn new(message: impl Into<String>) -> Error {
    Error::from_parts(message.into(), Cause::None, None)
}

/// Create a terminal error carrying the caller's call path
#[must_use]
#[inline(never)]
pub fn new_with_path(message: impl Into<String>) -> Error {
    let path = CallPath::capture();
    Error::from_parts(message.into(), Cause::None, path)
}

/// Wrap `err` as the cause of a new error rendered `"{message}: {err}"`
#[must_use]
pub fn wrap<E>(err: E, message: impl Into<String>) -> Error
where
    E: Into<BoxError>,
{
    Error::from_parts(message.into(), Cause::Wrapped(err.into()), None)
}

/// Same as [`wrap`], also capturing the call path at the wrap site
#[must_use]
#[inline(never)]
pub fn wrap_with_path<E>(err: E, message: impl Into<String>) -> Error
where
    E: Into<BoxError>,
{
    let path = CallPath::capture();
    Error::from_parts(message.into(), Cause::Wrapped(err.into()), path)
}

/// Backs [`newf!`](crate::newf)
#[doc(hidden)]
#[must_use]
pub fn new_fmt(args: fmt::Arguments<'_>) -> Error {
    Error::from_parts(args.to_string(), Cause::None, None)
}

/// Backs [`new_with_pathf!`](crate::new_with_pathf)
#[doc(hidden)]
#[must_use]
#[inline(never)]
pub fn new_with_path_fmt(args: fmt::Arguments<'_>) -> Error {
    let path = CallPath::capture();
    Error::from_parts(args.to_string(), Cause::None, path)
}

/// Backs [`wrapf!`](crate::wrapf)
#[doc(hidden)]
#[must_use]
pub fn wrap_fmt<E>(err: E, args: fmt::Arguments<'_>) -> Error
where
    E: Into<BoxError>,
{
    Error::from_parts(args.to_string(), Cause::Wrapped(err.into()), None)
}

/// Backs [`wrap_with_pathf!`](crate::wrap_with_pathf)
#[doc(hidden)]
#[must_use]
#[inline(never)]
pub fn wrap_with_path_fmt<E>(err: E, args: fmt::Arguments<'_>) -> Error
where
    E: Into<BoxError>,
{
    let path = CallPath::capture();
    Error::from_parts(args.to_string(), Cause::Wrapped(err.into()), path)
}
