#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the callable handles that sit in the slots of a
//! `logging::Logger`. A [`Sink`] wraps a shared
//! `Fn(fmt::Arguments<'_>)` and is either the process-wide discard sentinel or
//! an active callable. Call sites test a sink against the sentinel with
//! [`is_discarded`] before evaluating or formatting any arguments, so a
//! disabled level costs a single pointer comparison.
//!
//! # Design
//!
//! The sentinel is created once behind a [`std::sync::OnceLock`] and handed
//! out by [`Sink::discard`]. Identity is the address of the shared
//! allocation: every [`Sink::new`] allocates, clones share the allocation, and
//! the comparison never touches the vtable or invokes the callable.
//!
//! [`LineSink`] is the writer-backed decorator installed by the logger
//! factory. It renders `<TAG>: <prepend><date> <time> <message>` into a
//! scratch buffer and hands the complete line to the locked writer in one
//! `write_all`, so concurrent callers never interleave partial lines.
//!
//! # Invariants
//!
//! - [`Sink::discard`] always returns a handle identical to every other
//!   discard handle in the process.
//! - A [`Sink`] can never be "unset": [`Default`] and `From<Option<Sink>>`
//!   both fold absence into the sentinel.
//! - [`LineSink`] never surfaces I/O failures through the [`Sink`] it
//!   produces; logging must not fail the caller.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{is_discarded, LevelTag, LineSink, Sink};
//!
//! assert!(is_discarded(&Sink::discard()));
//! assert!(is_discarded(&Sink::default()));
//!
//! let sink = LineSink::new(Vec::<u8>::new(), LevelTag::Error, "(wg0) ").into_sink();
//! assert!(!is_discarded(&sink));
//!
//! // A callable that happens to do nothing is still not the sentinel.
//! assert!(!is_discarded(&Sink::new(|_| {})));
//! ```

mod line_mode;
mod sink;

pub use line_mode::LineMode;
pub use sink::{LevelTag, LineSink, LogFn, SharedWriter, Sink, is_discarded};
