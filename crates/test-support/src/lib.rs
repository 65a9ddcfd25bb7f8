#![deny(unsafe_code)]

//! crates/test-support/src/lib.rs
//! Shared helpers for capturing and checking decorated log output in tests.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the written output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Number of `write` calls that reached the buffer.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pieces of a `<TAG>: <prefix><date> <time> <message>` line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecoratedLine<'a> {
    /// `YYYY/MM/DD HH:MM:SS`.
    pub timestamp: &'a str,
    /// Text after the timestamp and its separating space.
    pub message: &'a str,
}

/// Splits `line` if it carries `tag`, `prefix`, and a well-formed timestamp.
pub fn parse_line<'a>(line: &'a str, tag: &str, prefix: &str) -> Option<DecoratedLine<'a>> {
    let rest = line.strip_prefix(tag)?.strip_prefix(": ")?;
    let rest = rest.strip_prefix(prefix)?;
    let timestamp = rest.get(..19)?;
    if !is_timestamp(timestamp) {
        return None;
    }
    let message = rest.get(19..)?.strip_prefix(' ')?;
    Some(DecoratedLine { timestamp, message })
}

/// Reports whether `text` is exactly `YYYY/MM/DD HH:MM:SS`.
pub fn is_timestamp(text: &str) -> bool {
    text.len() == 19
        && text.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'/',
            10 => byte == b' ',
            13 | 16 => byte == b':',
            _ => byte.is_ascii_digit(),
        })
}
