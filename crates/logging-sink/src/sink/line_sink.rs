//! crates/logging-sink/src/sink/line_sink.rs
//! Writer-backed decorator producing one timestamped line per call.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use time::UtcOffset;

use super::handle::Sink;
use super::timestamp::{local_offset, write_timestamp};
use crate::line_mode::LineMode;

/// Writer shared by every [`LineSink`] emitting to the same stream.
pub type SharedWriter<W> = Arc<Mutex<W>>;

/// Scratch capacity kept per thread between calls.
const SCRATCH_RETAIN: usize = 4096;

thread_local! {
    static SCRATCH: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// `fmt::Write` over raw bytes; unlike `io::Write::write_fmt`, a failing
/// `Display` impl returns an error instead of panicking.
struct ByteWriter<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.0.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Literal tag written at the start of every decorated line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LevelTag {
    /// `DEBUG`, used by the verbose slot.
    Debug,
    /// `ERROR`, used by the error slot.
    Error,
}

impl LevelTag {
    /// Returns the tag exactly as it appears in output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LevelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decorates formatted messages and writes them to a shared writer.
///
/// Each call renders `<TAG>: <prepend><YYYY/MM/DD> <HH:MM:SS> <message>` into
/// a per-thread scratch buffer, terminates it according to the configured
/// [`LineMode`], and issues a single `write_all` while holding the writer's
/// lock. Lines from concurrent callers therefore arrive whole and in some
/// serial order.
///
/// The local UTC offset is resolved once at construction and not refreshed,
/// so a sink built before a daylight-saving change keeps stamping lines with
/// the old offset. Rebuild the logger to pick up a new offset.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging_sink::{LevelTag, LineSink};
///
/// let writer = Arc::new(Mutex::new(Vec::<u8>::new()));
/// let sink = LineSink::with_shared(Arc::clone(&writer), LevelTag::Debug, "(wg0) ");
///
/// sink.write_args(format_args!("count={}", 5))?;
///
/// let output = String::from_utf8(writer.lock().unwrap().clone()).unwrap();
/// assert!(output.starts_with("DEBUG: (wg0) "));
/// assert!(output.ends_with("count=5\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink<W> {
    writer: SharedWriter<W>,
    prefix: String,
    line_mode: LineMode,
    offset: UtcOffset,
}

impl<W> LineSink<W> {
    /// Creates a sink that owns `writer`.
    pub fn new(writer: W, tag: LevelTag, prepend: &str) -> Self {
        Self::with_shared(Arc::new(Mutex::new(writer)), tag, prepend)
    }

    /// Creates a sink over a writer that other sinks may also hold.
    ///
    /// Sinks sharing a writer serialise through its mutex, so lines from
    /// different levels never interleave either.
    pub fn with_shared(writer: SharedWriter<W>, tag: LevelTag, prepend: &str) -> Self {
        Self {
            writer,
            prefix: format!("{tag}: {prepend}"),
            line_mode: LineMode::default(),
            offset: local_offset(),
        }
    }

    /// Replaces the [`LineMode`] used for subsequent writes.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Returns the `"<TAG>: <prepend>"` text written before each timestamp.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Renders and writes one decorated line.
    ///
    /// Errors come from the underlying writer. A `Display` implementation
    /// that fails mid-message truncates the message but the line is still
    /// written.
    pub fn write_args(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let scratch = SCRATCH.try_with(|scratch| match scratch.try_borrow_mut() {
            Ok(mut buf) => {
                let result = self.emit(&mut buf, args);
                buf.clear();
                buf.shrink_to(SCRATCH_RETAIN);
                Some(result)
            }
            // Re-entered from an argument's Display impl on this thread.
            Err(_) => None,
        });
        match scratch {
            Ok(Some(result)) => result,
            // Busy, or already destroyed while thread-local destructors run.
            Ok(None) | Err(_) => self.emit(&mut Vec::new(), args),
        }
    }

    fn render(&self, buf: &mut Vec<u8>, args: fmt::Arguments<'_>) {
        buf.clear();
        buf.extend_from_slice(self.prefix.as_bytes());
        write_timestamp(buf, self.offset);
        buf.push(b' ');
        let _ = fmt::write(&mut ByteWriter(buf), args);
        if self.line_mode.append_newline() && buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }
    }

    fn emit(&self, buf: &mut Vec<u8>, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.render(buf, args);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(buf)?;
        writer.flush()
    }
}

impl<W> LineSink<W>
where
    W: Write + Send + 'static,
{
    /// Converts the decorator into an active [`Sink`].
    ///
    /// Write failures are dropped inside the returned sink.
    #[must_use]
    pub fn into_sink(self) -> Sink {
        Sink::new(move |args| {
            let _ = self.write_args(args);
        })
    }
}

impl<W> fmt::Debug for LineSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("prefix", &self.prefix)
            .field("line_mode", &self.line_mode)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
