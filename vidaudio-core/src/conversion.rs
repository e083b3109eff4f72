//! Single-file conversion and outcome classification.
//!
//! A `Converter` runs ffmpeg once per input and turns the exit code into a
//! `ConversionOutcome`. ffmpeg exits with 1 both when `-n` stops it from
//! replacing an existing output and for many unrelated errors, so an exit
//! code of 1 only counts as a skip when overwrite is off and the output file
//! is actually on disk. The check races with anything else touching the
//! output; a wrong guess is reported as a failure.

use crate::external::ffmpeg_executor::ToolRunner;
use crate::external::{FFMPEG_REFUSED_EXIT_CODE, build_audio_extract_args};

use std::io;
use std::path::{Path, PathBuf};

/// Exit code reported when the ffmpeg binary cannot be found at run time.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Exit code reported when the ffmpeg binary exists but cannot be started.
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;

/// Result of converting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// ffmpeg exited with 0.
    Success,
    /// The output already existed and overwrite was not requested.
    SkippedExisting,
    /// Any other result, carrying the exit code.
    Failed(i32),
}

impl ConversionOutcome {
    /// Classifies an ffmpeg exit code.
    #[must_use]
    pub fn from_exit_code(code: i32, overwrite: bool, output: &Path) -> Self {
        match code {
            0 => ConversionOutcome::Success,
            FFMPEG_REFUSED_EXIT_CODE if !overwrite && output.exists() => {
                ConversionOutcome::SkippedExisting
            }
            code => ConversionOutcome::Failed(code),
        }
    }
}

/// Runs ffmpeg for individual files.
pub struct Converter<R: ToolRunner> {
    runner: R,
    program: PathBuf,
}

impl<R: ToolRunner> Converter<R> {
    /// Creates a converter that runs `program` through `runner`.
    pub fn new(runner: R, program: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Converts `input` to MP3 at `output`.
    ///
    /// Never returns an error: a failure to start ffmpeg is reported on
    /// stderr and becomes `Failed(127)` (not found) or `Failed(126)`.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        bitrate: &str,
        overwrite: bool,
    ) -> ConversionOutcome {
        let args = build_audio_extract_args(input, output, bitrate, overwrite);

        match self.runner.run(&self.program, &args) {
            Ok(code) => {
                let outcome = ConversionOutcome::from_exit_code(code, overwrite, output);
                log::debug!("{} -> {:?}", input.display(), outcome);
                outcome
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!(
                    "ffmpeg executable '{}' not found. Check your installation.",
                    self.program.display()
                );
                log::debug!("Failed to start {}: {}", self.program.display(), e);
                ConversionOutcome::Failed(NOT_FOUND_EXIT_CODE)
            }
            Err(e) => {
                eprintln!(
                    "Failed to start ffmpeg '{}': {}",
                    self.program.display(),
                    e
                );
                log::debug!("Failed to start {}: {}", self.program.display(), e);
                ConversionOutcome::Failed(NOT_EXECUTABLE_EXIT_CODE)
            }
        }
    }
}
