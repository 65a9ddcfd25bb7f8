//! crates/logging-sink/src/sink/timestamp.rs
//! Date and time stamps for decorated log lines.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// `YYYY/MM/DD HH:MM:SS`, the layout used by line-oriented Printf loggers.
pub(crate) const LINE_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

const FALLBACK_TIMESTAMP: &[u8] = b"1970/01/01 00:00:00";

/// Resolves the host's local offset, falling back to UTC.
///
/// The lookup can fail once a process has started additional threads on
/// some platforms, so sinks resolve it once when they are built.
pub(crate) fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Appends the current time in `offset` to `buf`.
pub(crate) fn write_timestamp(buf: &mut Vec<u8>, offset: UtcOffset) {
    let mark = buf.len();
    let now = OffsetDateTime::now_utc().to_offset(offset);
    if now.format_into(buf, LINE_TIMESTAMP_FORMAT).is_err() {
        buf.truncate(mark);
        buf.extend_from_slice(FALLBACK_TIMESTAMP);
    }
}
