//! Embedding harness that drives a shared [`Logger`] from worker threads
//! the way a tunnel device hands its logger to every routine.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use clap::Parser;
use logging::{Level, Logger, LoggerConfig, ParseLevelError, errorf, verbosef};

/// Exit status for command-line usage errors, matching clap's own.
const USAGE_EXIT_CODE: u8 = 2;

/// Command-line options for the `tunlog` daemon.
#[derive(Clone, Debug, Parser)]
#[command(name = "tunlog", version, about = "Drive the tunnel logger from worker threads")]
pub struct Options {
    /// Highest level that produces output (silent, error, verbose, or 0-2).
    ///
    /// Falls back to `LOG_LEVEL`, then to `error`.
    #[arg(long)]
    pub level: Option<Level>,

    /// Interface name placed in every line's prefix.
    #[arg(long, default_value = "tun0")]
    pub interface: String,

    /// Number of worker threads sharing the logger.
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Verbose messages logged by each worker.
    #[arg(long, default_value_t = 1)]
    pub messages: usize,
}

impl Options {
    /// Prefix written after the level tag, e.g. `(tun0) `.
    #[must_use]
    pub fn prepend(&self) -> String {
        format!("({}) ", self.interface)
    }

    /// Resolves the logger configuration, reading the environment only when
    /// no `--level` was given.
    pub fn logger_config(&self) -> Result<LoggerConfig, ParseLevelError> {
        match self.level {
            Some(level) => Ok(LoggerConfig::new(level, self.prepend())),
            None => LoggerConfig::from_env(self.prepend()),
        }
    }
}

/// Parses `args` and runs the daemon with a logger on standard output.
///
/// Help and version output go to `stdout`; usage errors go to `stderr`
/// and map to exit status 2.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let options = match Options::try_parse_from(args) {
        Ok(options) => options,
        Err(error) => {
            let rendered = error.render().to_string();
            if error.use_stderr() {
                write_rendered(stderr, &rendered);
                return ExitCode::from(USAGE_EXIT_CODE);
            }
            write_rendered(stdout, &rendered);
            return ExitCode::SUCCESS;
        }
    };

    match options.logger_config() {
        Ok(config) => run(&options, config.build()),
        Err(error) => {
            write_rendered(stderr, &format!("error: {error}\n"));
            ExitCode::from(USAGE_EXIT_CODE)
        }
    }
}

/// Runs the workers against `logger` and waits for all of them.
pub fn run(options: &Options, logger: Logger) -> ExitCode {
    let logger = Arc::new(logger);
    verbosef!(logger, "Starting tunlog version {}", env!("CARGO_PKG_VERSION"));

    let mut handles = Vec::with_capacity(options.workers);
    for id in 0..options.workers {
        let worker_logger = Arc::clone(&logger);
        let messages = options.messages;
        let spawned = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || worker(id, messages, &worker_logger));
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(error) => {
                errorf!(logger, "Failed to start worker {}: {}", id, error);
                break;
            }
        }
    }

    let started = handles.len();
    let mut failed = started < options.workers;
    for handle in handles {
        if handle.join().is_err() {
            failed = true;
        }
    }

    if failed {
        errorf!(logger, "Only {} of {} workers completed", started, options.workers);
    }
    verbosef!(logger, "Shutting down");

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn write_rendered<W: Write>(target: &mut W, text: &str) {
    // Nothing useful remains to be done if the terminal is gone.
    let _ = target.write_all(text.as_bytes());
    let _ = target.flush();
}

fn worker(id: usize, messages: usize, logger: &Logger) {
    for message in 0..messages {
        verbosef!(logger, "worker {}: message {}", id, message);
    }
    errorf!(logger, "worker {}: finished", id);
}
