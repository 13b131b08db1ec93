//! Error values with call paths for the cryypt project
//!
//! Errors are created with [`new`] or [`new_with_path`], layered with
//! [`wrap`] or [`wrap_with_path`], and queried with [`unwrap`], [`is`],
//! [`as_kind`] and [`join`]. The `*_with_path` variants record the caller's
//! call path; symbols are only looked up when the error is rendered verbosely.
//!
//! ```
//! use cryypt_errors::{is, new, new_with_path, unwrap, wrap};
//!
//! let bottom = new("bottom");
//! let middle = wrap(bottom.clone(), "middle");
//! let top = wrap(middle.clone(), "top");
//!
//! assert_eq!(top.to_string(), "top: middle: bottom");
//! assert!(is(&top, &bottom));
//! assert!(unwrap(&bottom).is_none());
//!
//! // `{:#}` prints the message followed by the captured frames
//! let traced = new_with_path("boom");
//! assert!(format!("{traced:#}").starts_with("boom\n"));
//! ```

pub mod error;
pub mod path;

pub use error::*;
pub use path::{CallPath, CaptureConfig, ConfigError, ResolvedFrame, configure};
