//! crates/logging-sink/src/sink/handle.rs
//! Shared sink handle and the process-wide discard sentinel.

use std::fmt;
use std::ptr;
use std::sync::{Arc, OnceLock};

/// Callable shape stored in every [`Sink`].
///
/// The argument bundle is produced by [`format_args!`], so nothing is
/// rendered until the callable decides to write it.
pub type LogFn = dyn Fn(fmt::Arguments<'_>) + Send + Sync;

static DISCARD: OnceLock<Sink> = OnceLock::new();

fn discard_logf(_args: fmt::Arguments<'_>) {}

fn sentinel() -> &'static Sink {
    DISCARD.get_or_init(|| Sink::new(discard_logf))
}

/// Shared, thread-safe log callable.
///
/// A sink is either the discard sentinel returned by [`Sink::discard`] or an
/// active callable built with [`Sink::new`]. The two cases are told apart by
/// identity, never by behaviour: a callable that happens to do nothing is
/// still active.
///
/// Cloning is cheap and preserves identity.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use logging_sink::Sink;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let sink = Sink::new(move |_| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// assert!(!sink.is_discard());
/// sink.log(format_args!("tick"));
/// assert_eq!(calls.load(Ordering::Relaxed), 1);
/// ```
#[derive(Clone)]
pub struct Sink {
    target: Arc<LogFn>,
}

impl Sink {
    /// Wraps `f` in a new sink with its own identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(fmt::Arguments<'_>) + Send + Sync + 'static,
    {
        Self {
            target: Arc::new(f),
        }
    }

    /// Returns the process-wide discard sentinel.
    ///
    /// The sentinel is created on first use and never mutated afterwards;
    /// every call returns a handle sharing the same identity.
    #[must_use]
    pub fn discard() -> Self {
        sentinel().clone()
    }

    /// Reports whether this handle is the discard sentinel.
    ///
    /// Only the address of the shared allocation is compared. The callable
    /// is not invoked and nothing is allocated.
    #[inline]
    #[must_use]
    pub fn is_discard(&self) -> bool {
        Self::ptr_eq(self, sentinel())
    }

    /// Reports whether two handles share the same underlying callable.
    #[inline]
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        // Vtable pointers are not unique across codegen units; compare data only.
        ptr::addr_eq(Arc::as_ptr(&a.target), Arc::as_ptr(&b.target))
    }

    /// Invokes the callable with pre-captured arguments.
    #[inline]
    pub fn log(&self, args: fmt::Arguments<'_>) {
        (self.target)(args);
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::discard()
    }
}

impl From<Option<Sink>> for Sink {
    /// Folds an absent sink into the discard sentinel.
    fn from(sink: Option<Sink>) -> Self {
        sink.unwrap_or_default()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_discard() {
            f.write_str("Sink::Discard")
        } else {
            f.write_str("Sink::Active")
        }
    }
}

/// Reports whether `sink` is the process-wide discard sentinel.
///
/// Call sites use this to skip argument evaluation and formatting for a
/// disabled level. Equivalent to [`Sink::is_discard`].
#[inline]
#[must_use]
pub fn is_discarded(sink: &Sink) -> bool {
    sink.is_discard()
}
