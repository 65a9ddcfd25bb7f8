//! crates/logging/src/tracing_bridge.rs
//! Sinks that forward to the `tracing` crate.
//!
//! Embedding applications that already run a tracing subscriber can build a
//! [`Logger`] whose active slots emit tracing events instead of writing
//! decorated lines to standard output. The subscriber then owns formatting,
//! timestamps, and destinations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Level, Logger, verbosef};
//!
//! tracing_subscriber::fmt().init();
//! let logger = Logger::tracing(Level::Verbose);
//! verbosef!(logger, "peer {} up", 1);
//! ```

use logging_sink::{LevelTag, Sink};

use super::levels::Level;
use super::logger::Logger;

/// Target attached to every event emitted by a tracing sink.
pub const TRACING_TARGET: &str = "tunlog";

/// Returns an active sink forwarding to `tracing` at the level matching `tag`.
///
/// [`LevelTag::Debug`] maps to `tracing::debug!` and [`LevelTag::Error`] to
/// `tracing::error!`. Events carry the formatted message only.
#[must_use]
pub fn tracing_sink(tag: LevelTag) -> Sink {
    match tag {
        LevelTag::Debug => Sink::new(|args| tracing::debug!(target: TRACING_TARGET, "{}", args)),
        LevelTag::Error => Sink::new(|args| tracing::error!(target: TRACING_TARGET, "{}", args)),
    }
}

impl Logger {
    /// Builds a logger whose enabled slots forward to `tracing`.
    ///
    /// Slots are enabled with the same thresholds as [`Logger::new`].
    #[must_use]
    pub fn tracing(level: Level) -> Self {
        Self::wire(level, tracing_sink)
    }
}
