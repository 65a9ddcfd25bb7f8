#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for the worker threads' line buffers.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[path = "daemon.rs"]
mod daemon;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    // Standard output stays unlocked here: worker threads write log lines to it.
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    daemon::run_with(env::args_os(), &mut stdout, &mut stderr)
}
