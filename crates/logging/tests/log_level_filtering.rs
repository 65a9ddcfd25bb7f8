//! Integration tests for level thresholds and guarded call sites.
//!
//! These tests verify which slots `build` activates for each level, that the
//! identity check distinguishes the discard sentinel from every real sink,
//! and that guarded calls on a disabled level neither evaluate arguments nor
//! write output.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use logging::{Level, Logger, Sink, build, errorf, is_discarded, verbosef};
use test_support::{SharedBuffer, parse_line};

const PREFIXES: [&str; 4] = ["", "(wg0) ", "peer(AbCd…) ", "{} %d "];

// ============================================================================
// Slot Wiring Tests
// ============================================================================

/// Verifies the verbose slot is the sentinel exactly below Verbose.
#[test]
fn verbose_slot_is_discard_below_verbose() {
    for level in Level::ALL {
        for prefix in PREFIXES {
            let logger = build(level, prefix);
            assert_eq!(
                is_discarded(&logger.verbose),
                level < Level::Verbose,
                "level={level} prefix={prefix:?}"
            );
        }
    }
}

/// Verifies the error slot is the sentinel exactly below Error.
#[test]
fn error_slot_is_discard_below_error() {
    for level in Level::ALL {
        for prefix in PREFIXES {
            let logger = build(level, prefix);
            assert_eq!(
                is_discarded(&logger.error),
                level < Level::Error,
                "level={level} prefix={prefix:?}"
            );
        }
    }
}

/// Verifies every disabled slot shares the one process-wide sentinel.
#[test]
fn disabled_slots_share_the_sentinel() {
    let silent = build(Level::Silent, "a");
    let error = build(Level::Error, "b");
    let sentinel = Sink::discard();

    assert!(Sink::ptr_eq(&silent.verbose, &sentinel));
    assert!(Sink::ptr_eq(&silent.error, &sentinel));
    assert!(Sink::ptr_eq(&error.verbose, &sentinel));
}

/// Verifies each build produces new active sinks.
#[test]
fn active_slots_are_distinct_per_logger() {
    let first = build(Level::Verbose, "");
    let second = build(Level::Verbose, "");

    assert!(!Sink::ptr_eq(&first.verbose, &first.error));
    assert!(!Sink::ptr_eq(&first.verbose, &second.verbose));
    assert!(!Sink::ptr_eq(&first.error, &second.error));
}

// ============================================================================
// Identity Check Tests
// ============================================================================

/// Verifies the sentinel is recognised.
#[test]
fn sentinel_is_discarded() {
    assert!(is_discarded(&Sink::discard()));
}

/// Verifies a do-nothing callable is not mistaken for the sentinel.
#[test]
fn behaviourally_silent_sink_is_not_discarded() {
    assert!(!is_discarded(&Sink::new(|_| {})));
}

/// Verifies the identity check never invokes the sink.
#[test]
fn identity_check_has_no_side_effect() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sink = Sink::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!is_discarded(&sink));
    assert!(!is_discarded(&sink.clone()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Output Format Tests
// ============================================================================

/// Verifies a Printf-style call renders tag, prefix, timestamp, and message.
#[test]
fn active_sink_renders_count_line() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Verbose, "(wg0) ", buffer.clone());

    logger.error.log(format_args!("count={}", 5));
    logger.verbose.log(format_args!("count={}", 5));

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.ends_with("count=5")));
    assert!(parse_line(&lines[0], "ERROR", "(wg0) ").is_some());
    assert!(parse_line(&lines[1], "DEBUG", "(wg0) ").is_some());
}

/// Verifies the prefix is written literally, never treated as a format.
#[test]
fn prefix_is_not_interpreted() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Error, "{} %d ", buffer.clone());

    errorf!(logger, "x={}", 1);

    let lines = buffer.lines();
    let parsed = parse_line(&lines[0], "ERROR", "{} %d ").expect("literal prefix");
    assert_eq!(parsed.message, "x=1");
}

// ============================================================================
// Guarded Call Tests
// ============================================================================

/// Verifies a silent logger neither evaluates arguments nor writes a line.
#[test]
fn silent_errorf_skips_evaluation_and_output() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Silent, "", buffer.clone());
    let evaluated = AtomicUsize::new(0);
    let side_effect = || {
        evaluated.fetch_add(1, Ordering::SeqCst);
        "side effect"
    };

    errorf!(logger, "failure: {}", side_effect());
    verbosef!(logger, "detail: {}", side_effect());

    assert_eq!(evaluated.load(Ordering::SeqCst), 0);
    assert!(buffer.is_empty());
}

/// Verifies the method form also writes nothing for a disabled level.
#[test]
fn silent_method_call_writes_nothing() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Silent, "", buffer.clone());

    logger.errorf(format_args!("failure: {}", 1));
    logger.verbosef(format_args!("detail: {}", 2));

    assert!(buffer.is_empty());
}

/// Verifies the error level suppresses verbose but not error output.
#[test]
fn error_level_emits_errors_only() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Error, "", buffer.clone());
    let evaluated = AtomicUsize::new(0);
    let side_effect = || evaluated.fetch_add(1, Ordering::SeqCst);

    verbosef!(logger, "verbose {}", side_effect());
    errorf!(logger, "error {}", side_effect());

    assert_eq!(evaluated.load(Ordering::SeqCst), 1);
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ERROR: "));
    assert!(lines[0].ends_with("error 0"));
}

/// Verifies macros accept borrowed and shared loggers.
#[test]
fn macros_accept_references_and_arcs() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::with_writer(Level::Verbose, "", buffer.clone()));
    let borrowed: &Logger = &logger;

    verbosef!(logger, "from arc");
    verbosef!(borrowed, "from ref");
    errorf!(*borrowed, "from deref");

    assert_eq!(buffer.lines().len(), 3);
}

/// Verifies inline format captures work through the macros.
#[test]
fn macros_support_inline_captures() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(Level::Verbose, "", buffer.clone());
    let peer = 7;

    verbosef!(logger, "peer={peer} keepalive");

    assert!(buffer.lines()[0].ends_with("peer=7 keepalive"));
}

/// Verifies replacing a slot with the sentinel silences it for guarded calls.
#[test]
fn externally_discarded_slot_is_silent() {
    let buffer = SharedBuffer::new();
    let mut logger = Logger::with_writer(Level::Verbose, "", buffer.clone());
    logger.error = Sink::from(None);

    errorf!(logger, "dropped");
    verbosef!(logger, "kept");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("DEBUG: "));
}
