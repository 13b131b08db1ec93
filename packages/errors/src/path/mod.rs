//! Call-path capture and lazy rendering
//!
//! A [`CallPath`] is a snapshot of return addresses taken when an error is
//! created. Capturing only copies addresses; symbol, file and line lookups are
//! deferred until the path is rendered for the first time and then cached for
//! the lifetime of the value.

pub mod capture;
pub mod config;
pub mod frame;
pub mod render;

use once_cell::sync::OnceCell;
use std::fmt;

pub use config::{CaptureConfig, ConfigError, capture_config, configure};
pub use frame::{ResolvedFrame, display_name};

/// Hard upper bound on captured entries.
///
/// Deeper call paths keep only the entries nearest to the capture site.
pub const MAX_DEPTH: usize = 32;

/// Addresses recorded at error creation, resolved on first use.
pub struct CallPath {
    /// Return addresses, innermost first
    addresses: Vec<usize>,
    /// Resolved frames, filled at most once
    frames: OnceCell<Vec<ResolvedFrame>>,
}

impl CallPath {
    #[cfg(feature = "full-backtrace")]
    pub(crate) fn from_addresses(addresses: Vec<usize>) -> Self {
        Self {
            addresses,
            frames: OnceCell::new(),
        }
    }

    /// Number of captured entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Raw return addresses in capture order
    #[must_use]
    pub fn addresses(&self) -> &[usize] {
        &self.addresses
    }

    /// Whether the frames have already been resolved
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.frames.get().is_some()
    }

    /// Resolved frames, innermost first.
    ///
    /// The first call performs symbolication; concurrent first callers are
    /// serialised and every caller observes the same frames.
    pub fn frames(&self) -> &[ResolvedFrame] {
        self.frames
            .get_or_init(|| render::resolve_all(&self.addresses))
    }
}

impl fmt::Debug for CallPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallPath")
            .field("depth", &self.addresses.len())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
