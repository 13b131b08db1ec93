//! Core error types and definitions

use crate::path::CallPath;
use std::sync::Arc;

/// Boxed error accepted as a cause by `wrap` and `join`
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Immutable error value with an optional call path.
///
/// Cloning is cheap and shares the same node; equality is node identity, so
/// a clone compares equal to its original and to nothing else.
#[derive(Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

pub(super) struct ErrorInner {
    /// This layer's own text, without causes
    pub message: String,
    /// What this layer wraps, if anything
    pub cause: Cause,
    /// Call path captured when this layer was created
    pub path: Option<CallPath>,
}

pub(super) enum Cause {
    /// Terminal error
    None,
    /// One wrapped cause
    Wrapped(BoxError),
    /// Aggregated causes from `join`
    Joined(Vec<BoxError>),
}

impl Error {
    pub(super) fn from_parts(message: String, cause: Cause, path: Option<CallPath>) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                message,
                cause,
                path,
            }),
        }
    }

    /// This layer's own message, without any cause text
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Call path captured for this layer
    #[must_use]
    pub fn path(&self) -> Option<&CallPath> {
        self.inner.path.as_ref()
    }

    /// Whether this layer carries a call path
    #[must_use]
    pub fn has_path(&self) -> bool {
        self.inner.path.is_some()
    }

    /// Whether this error has no cause
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.inner.cause, Cause::None)
    }

    /// Causes aggregated by `join`; empty for any other error
    pub fn joined(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        let causes: &[BoxError] = match &self.inner.cause {
            Cause::Joined(causes) => causes.as_slice(),
            _ => &[],
        };
        causes
            .iter()
            .map(|cause| &**cause as &(dyn std::error::Error + 'static))
    }

    /// Whether both handles share one node
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}
