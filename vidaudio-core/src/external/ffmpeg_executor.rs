// ============================================================================
// vidaudio-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Process Execution Abstraction
//
// This module provides the seam through which ffmpeg is actually run. The
// conversion logic only needs an exit code back, so the trait is a single
// blocking call. Tests substitute their own runner to script exit codes and
// record the argument lists they receive.
//
// KEY COMPONENTS:
// - ToolRunner: Trait for running an external program to completion
// - SystemRunner: std::process implementation with inherited stdio

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Exit code reported when a process ends without one (e.g. killed by a
/// signal on a platform where the signal number is unavailable).
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Trait representing something that can run an external program.
pub trait ToolRunner {
    /// Runs `program` with `args`, blocking until it exits, and returns its
    /// exit code.
    ///
    /// Termination by signal is reported as the negated signal number.
    /// Failure to start the program is returned as the underlying I/O error.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<i32>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<i32> {
        (**self).run(program, args)
    }
}

/// Runs programs with `std::process::Command`.
///
/// stdin, stdout and stderr are inherited, so ffmpeg's own error lines reach
/// the user's terminal directly.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<i32> {
        log::debug!("Running command: {} {:?}", program.display(), args);
        let status = Command::new(program).args(args).status()?;
        let code = exit_code_of(status);
        log::debug!("{} exited with code {}", program.display(), code);
        Ok(code)
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(UNKNOWN_EXIT_CODE)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(UNKNOWN_EXIT_CODE)
}
