//! Cause-chain queries
//!
//! All of these work on any `std::error::Error`, not just [`Error`]. The walk
//! follows `source()` and, for errors built by [`join`], every joined cause
//! in order.

use super::types::{BoxError, Cause, Error};
use std::error::Error as StdError;

/// Depth-first iterator over an error and everything it wraps
pub struct Chain<'a> {
    stack: Vec<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        match current.downcast_ref::<Error>() {
            Some(error) if matches!(error.inner.cause, Cause::Joined(_)) => {
                let joined: Vec<_> = error.joined().collect();
                self.stack.extend(joined.into_iter().rev());
            }
            _ => {
                if let Some(source) = current.source() {
                    self.stack.push(source);
                }
            }
        }
        Some(current)
    }
}

/// Walk `err` and its causes, starting with `err` itself
#[must_use]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { stack: vec![err] }
}

/// The immediate cause of `err`.
///
/// `None` for terminal errors and for errors built by [`join`].
#[must_use]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Whether `target` is `err` or appears anywhere in its chain.
///
/// Errors are compared by identity: the same value of the same type, or two
/// [`Error`] handles sharing one node. A wrapper and its first field share an
/// address but not a type, so they never match.
#[must_use]
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|candidate| same_error(candidate, target))
}

/// First error in the chain of `err` whose concrete type is `T`
#[must_use]
pub fn as_kind<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|candidate| candidate.downcast_ref::<T>())
}

/// Aggregate `errs` into one error whose chain visits each of them.
///
/// Returns `None` when `errs` is empty. The message is every cause's
/// message, one per line.
pub fn join<I>(errs: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: Into<BoxError>,
{
    let causes: Vec<BoxError> = errs.into_iter().map(Into::into).collect();
    if causes.is_empty() {
        return None;
    }
    Some(Error::from_parts(String::new(), Cause::Joined(causes), None))
}

fn same_error(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    // address and vtable: zero-sized errors all share one dangling address
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a.downcast_ref::<Error>(), b.downcast_ref::<Error>()) {
        (Some(a), Some(b)) => a.ptr_eq(b),
        _ => false,
    }
}
