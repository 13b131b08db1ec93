//! Symbolication and text rendering of captured paths

use super::{CallPath, frame::ResolvedFrame};
use std::ffi::c_void;
use std::fmt;

/// Resolve every captured address into exactly one frame.
///
/// When an address covers inlined calls the innermost symbol wins, so the
/// frame count always equals the captured depth.
pub(crate) fn resolve_all(addresses: &[usize]) -> Vec<ResolvedFrame> {
    let frames: Vec<ResolvedFrame> = addresses.iter().map(|&ip| resolve_one(ip)).collect();
    tracing::trace!(frames = frames.len(), "resolved call path");
    frames
}

fn resolve_one(ip: usize) -> ResolvedFrame {
    let mut resolved: Option<ResolvedFrame> = None;
    backtrace::resolve(ip as *mut c_void, |symbol| {
        if resolved.is_some() {
            return;
        }
        let Some(name) = symbol.name() else {
            return;
        };
        // `{:#}` drops the trailing `::h<hash>`
        let qualified = format!("{name:#}");
        resolved = Some(ResolvedFrame::new(
            &qualified,
            symbol.filename().map(|path| path.to_path_buf()),
            symbol.lineno(),
        ));
    });
    resolved.unwrap_or_else(ResolvedFrame::unknown)
}

impl CallPath {
    /// Write every frame as `name\n\tfile:line\n`, innermost first.
    ///
    /// The error message line is the caller's job. Resolution happens on the
    /// first render and is reused afterwards.
    pub fn render(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        for frame in self.frames() {
            writeln!(w, "{frame}")?;
        }
        Ok(())
    }
}
