//! crates/logging/src/macros.rs
//! Guarded logging macros.
//!
//! Both macros compare the slot against the discard sentinel before the
//! format arguments are evaluated, so a disabled level costs one pointer
//! comparison and no formatting.

/// Logs a debug line through a [`Logger`](crate::Logger)'s verbose slot.
///
/// `$logger` may be a `Logger`, `&Logger`, or anything that dereferences to
/// one (such as `Arc<Logger>`). The remaining tokens are passed to
/// [`format_args!`]. No trailing newline is needed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Level, Logger, verbosef};
///
/// let logger = Arc::new(Logger::new(Level::Verbose, "(wg0) "));
/// verbosef!(logger, "peer {} handshake complete", 3);
/// ```
#[macro_export]
macro_rules! verbosef {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if !logger.verbose.is_discard() {
            logger.verbose.log(::core::format_args!($($arg)+));
        }
    }};
}

/// Logs an error line through a [`Logger`](crate::Logger)'s error slot.
///
/// Arguments are only evaluated when the error slot is active.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, errorf};
///
/// fn peer_summary() -> String {
///     panic!("evaluated while the error level is disabled")
/// }
///
/// let logger = Logger::new(Level::Silent, "");
/// errorf!(logger, "failed: {}", peer_summary());
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if !logger.error.is_discard() {
            logger.error.log(::core::format_args!($($arg)+));
        }
    }};
}
