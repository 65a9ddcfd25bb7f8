//! crates/logging/src/logger.rs
//! The two-slot logger container and its factory.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use logging_sink::{LevelTag, LineSink, Sink};

use super::levels::Level;

/// Verbose and error sinks handed to the components of a daemon.
///
/// Both slots are public and may be replaced at any time by the embedding
/// application, for example with [`Sink::discard`] to silence a level or
/// with a custom [`Sink`] that forwards to another backend. A slot can never
/// be absent: the [`Default`] logger holds the discard sentinel in both.
///
/// The container performs no synchronisation of its own. Share it behind an
/// [`Arc`] once built; replacing a slot after sharing requires the caller's
/// own locking.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, verbosef};
///
/// let logger = Logger::new(Level::Error, "(wg0) ");
/// assert!(logger.verbose.is_discard());
/// assert!(!logger.error.is_discard());
///
/// verbosef!(logger, "not formatted: {}", 1 + 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Logger {
    /// Debug output; the sentinel unless the level is [`Level::Verbose`].
    pub verbose: Sink,
    /// Error output; the sentinel when the level is [`Level::Silent`].
    pub error: Sink,
}

impl Logger {
    /// Builds a logger that writes decorated lines to standard output.
    ///
    /// Lines look like `DEBUG: <prepend>2006/01/02 15:04:05 message`. The
    /// error slot is active for [`Level::Error`] and above, the verbose slot
    /// for [`Level::Verbose`]; every other slot holds the discard sentinel.
    #[must_use]
    pub fn new(level: Level, prepend: &str) -> Self {
        Self::with_writer(level, prepend, io::stdout())
    }

    /// Builds a logger over an arbitrary writer.
    ///
    /// Both active slots share `writer` behind one lock, so lines from the
    /// two levels never interleave.
    pub fn with_writer<W>(level: Level, prepend: &str, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let shared = Arc::new(Mutex::new(writer));
        Self::wire(level, |tag| {
            LineSink::with_shared(Arc::clone(&shared), tag, prepend).into_sink()
        })
    }

    /// Returns a logger whose slots both hold the discard sentinel.
    #[must_use]
    pub fn discard() -> Self {
        Self::default()
    }

    /// Starts from a fully discarding logger and fills in the slots enabled
    /// by `level` using `make`.
    pub fn wire<F>(level: Level, mut make: F) -> Self
    where
        F: FnMut(LevelTag) -> Sink,
    {
        let mut logger = Self::discard();
        if level >= Level::Verbose {
            logger.verbose = make(LevelTag::Debug);
        }
        if level >= Level::Error {
            logger.error = make(LevelTag::Error);
        }
        logger
    }

    /// Reports the level implied by which slots are active.
    ///
    /// This is derived from the slots each time, so it reflects any
    /// replacement made after construction.
    #[must_use]
    pub fn level(&self) -> Level {
        if !self.verbose.is_discard() {
            Level::Verbose
        } else if !self.error.is_discard() {
            Level::Error
        } else {
            Level::Silent
        }
    }

    /// Logs to the verbose slot unless it is the discard sentinel.
    ///
    /// Arguments captured by `format_args!` are still evaluated by the
    /// caller; use [`verbosef!`](crate::verbosef) to skip that as well.
    #[inline]
    pub fn verbosef(&self, args: fmt::Arguments<'_>) {
        if !self.verbose.is_discard() {
            self.verbose.log(args);
        }
    }

    /// Logs to the error slot unless it is the discard sentinel.
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        if !self.error.is_discard() {
            self.error.log(args);
        }
    }
}

/// Builds a logger writing to standard output; see [`Logger::new`].
#[must_use]
pub fn build(level: Level, prepend: &str) -> Logger {
    Logger::new(level, prepend)
}
