//! Error values, construction and chain queries
//!
//! Provides:
//! - Terminal, wrapped and joined errors behind one `Error` handle
//! - Optional call-path capture per layer
//! - Compact, quoted and verbose rendering
//! - Identity and type based chain search

pub mod chain;
pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod types;

pub use chain::{Chain, as_kind, chain, is, join, unwrap};
pub use constructors::{new, new_with_path, wrap, wrap_with_path};
pub use display::{Rendered, Verbosity};
pub use extensions::ResultExt;
pub use types::{BoxError, Error, Result};
