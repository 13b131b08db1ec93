//! Formatting macros for error creation

/// Create a terminal error from a format string
///
/// ```
/// let err = cryypt_errors::newf!("missing key {}", "id");
/// assert_eq!(err.to_string(), "missing key id");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::error::constructors::new_fmt(::core::format_args!($($arg)*))
    };
}

/// Create a terminal error from a format string, capturing the call path
#[macro_export]
macro_rules! new_with_pathf {
    ($($arg:tt)*) => {
        $crate::error::constructors::new_with_path_fmt(::core::format_args!($($arg)*))
    };
}

/// Wrap an error with a formatted message
///
/// ```
/// let inner = cryypt_errors::new("timeout");
/// let err = cryypt_errors::wrapf!(inner, "request {} failed", 7);
/// assert_eq!(err.to_string(), "request 7 failed: timeout");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::error::constructors::wrap_fmt($err, ::core::format_args!($($arg)*))
    };
}

/// Wrap an error with a formatted message, capturing the call path
#[macro_export]
macro_rules! wrap_with_pathf {
    ($err:expr, $($arg:tt)*) => {
        $crate::error::constructors::wrap_with_path_fmt($err, ::core::format_args!($($arg)*))
    };
}
