//! Command implementations for the CLI.

/// Module containing the implementation of the conversion run.
/// Converts MP4 inputs to MP3 through ffmpeg and reports per-file status.
pub mod convert;
