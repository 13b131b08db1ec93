//! Stack walking at error creation time

use super::CallPath;
#[cfg(feature = "full-backtrace")]
use super::config::capture_config;

/// Frames between the anchor frame (`CallPath::capture`) and the caller's
/// call site: the public constructor that invoked capture.
///
/// Every public `*_with_path` entry point calls `CallPath::capture`
/// directly and is `#[inline(never)]`, so this stays fixed.
///
/// The first captured frame is the frame the constructor returns to. A caller
/// that invokes a constructor in tail position (`return new_with_path(..)`)
/// may be replaced by that jump in optimised builds, and a caller inlined into
/// its own parent resolves under the parent's name.
pub const INTERNAL_FRAMES: usize = 1;

/// Frames the unwinder itself may report above the anchor
#[cfg(feature = "full-backtrace")]
const MAX_LEAD_FRAMES: usize = 16;

impl CallPath {
    /// Capture the current call path, starting at the caller of the public
    /// constructor that invoked this.
    ///
    /// Returns `None` when capture is disabled. Only addresses are copied;
    /// nothing is resolved here.
    #[cfg(feature = "full-backtrace")]
    #[inline(never)]
    pub(crate) fn capture() -> Option<Self> {
        let config = capture_config();
        if !config.enabled {
            return None;
        }
        let max_depth = config.max_depth;
        let anchor = Self::capture as fn() -> Option<Self> as usize;

        let mut anchored = false;
        let mut skipped = 0;
        let lead_limit = MAX_LEAD_FRAMES + max_depth;
        let mut lead: Vec<usize> = Vec::with_capacity(MAX_LEAD_FRAMES);
        let mut addresses: Vec<usize> = Vec::with_capacity(max_depth);

        backtrace::trace(|frame| {
            if !anchored {
                if frame.symbol_address() as usize == anchor {
                    anchored = true;
                    return true;
                }
                lead.push(frame.ip() as usize);
                return lead.len() < lead_limit;
            }
            if skipped < INTERNAL_FRAMES {
                skipped += 1;
                return true;
            }
            addresses.push(frame.ip() as usize);
            addresses.len() < max_depth
        });

        if !anchored {
            tracing::debug!(
                inspected = lead.len(),
                "capture anchor not found, keeping unanchored frames"
            );
            lead.truncate(max_depth);
            addresses = lead;
        }

        tracing::trace!(depth = addresses.len(), "captured call path");
        Some(Self::from_addresses(addresses))
    }

    /// Capture is compiled out without the `full-backtrace` feature.
    #[cfg(not(feature = "full-backtrace"))]
    #[inline(never)]
    pub(crate) fn capture() -> Option<Self> {
        None
    }
}
