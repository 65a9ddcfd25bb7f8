//! crates/logging-sink/src/sink/mod.rs
//! Sink handles and the writer-backed line decorator.

mod handle;
mod line_sink;
mod timestamp;

pub use handle::{LogFn, Sink, is_discarded};
pub use line_sink::{LevelTag, LineSink, SharedWriter};
