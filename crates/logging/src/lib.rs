#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the leveled logger embedded in the tunnel daemon. A
//! [`Logger`] holds two public [`Sink`] slots, `verbose` and `error`; each is
//! either the process-wide discard sentinel or an active callable. [`build`]
//! wires the slots for a [`Level`] and a line prefix, writing decorated lines
//! to standard output.
//!
//! # Design
//!
//! "Disabled" is represented by the sentinel itself rather than by a flag
//! stored next to the sink, so the two can never disagree. Call sites go
//! through [`verbosef!`] and [`errorf!`], which test the slot's identity
//! before any argument is evaluated or formatted.
//!
//! # Invariants
//!
//! - [`build`] never leaves a slot unset: disabled levels hold the sentinel.
//! - `build(level, _).verbose` is active iff `level >= Level::Verbose`;
//!   `build(level, _).error` is active iff `level >= Level::Error`.
//! - Active sinks from [`build`] emit one whole line per call, even when
//!   called from many threads at once.
//! - Logging never reports failure to the caller.
//!
//! # Examples
//!
//! ```
//! use logging::{Level, Logger, errorf, verbosef};
//!
//! let logger = logging::build(Level::Verbose, "(wg0) ");
//! verbosef!(logger, "Routine: handshake initiation - started");
//! errorf!(logger, "Failed to send handshake: {}", "timeout");
//!
//! let mut quiet = Logger::discard();
//! assert_eq!(quiet.level(), Level::Silent);
//! quiet.error = logger.error.clone();
//! assert_eq!(quiet.level(), Level::Error);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Level`] and [`LoggerConfig`].
//! - `tracing`: `Logger::tracing` and `tracing_sink` forward to the
//!   `tracing` crate.

mod config;
mod levels;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LOG_LEVEL_ENV, LoggerConfig};
pub use levels::{Level, ParseLevelError};
pub use logger::{Logger, build};
pub use logging_sink::{LevelTag, LineMode, LineSink, Sink, is_discarded};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, tracing_sink};
