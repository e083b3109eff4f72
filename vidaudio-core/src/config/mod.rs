//! Configuration structures and constants for the vidaudio-core library.
//!
//! This module provides the settings that drive a conversion batch: where
//! outputs go, the audio bitrate handed to ffmpeg, the overwrite policy and
//! which ffmpeg program to run.

mod builder;

use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;

pub use builder::ConvertConfigBuilder;

// Default constants

/// Default audio bitrate passed verbatim to ffmpeg's `-b:a`.
pub const DEFAULT_BITRATE: &str = "192k";

/// Default ffmpeg program name, resolved through the search path.
pub const DEFAULT_FFMPEG_PROGRAM: &str = "ffmpeg";

/// Extension of the video container accepted as input (matched case-insensitively).
pub const INPUT_EXTENSION: &str = "mp4";

/// Extension written for every output file. Always lowercase.
pub const OUTPUT_EXTENSION: &str = "mp3";

/// ffmpeg audio encoder producing MP3 output.
pub const AUDIO_CODEC: &str = "libmp3lame";

/// Settings for one conversion batch.
///
/// # Examples
///
/// ```rust
/// use vidaudio_core::config::ConvertConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = ConvertConfigBuilder::new()
///     .output_dir(PathBuf::from("/path/to/audio"))
///     .bitrate("256k")
///     .overwrite(true)
///     .build();
///
/// assert_eq!(config.bitrate, "256k");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory for output files. `None` writes each output next to its input.
    pub output_dir: Option<PathBuf>,

    /// Audio bitrate, e.g. "192k".
    pub bitrate: String,

    /// Replace existing outputs (`-y`) instead of refusing (`-n`).
    pub overwrite: bool,

    /// ffmpeg program name or path.
    pub ffmpeg_program: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            bitrate: DEFAULT_BITRATE.to_string(),
            overwrite: false,
            ffmpeg_program: PathBuf::from(DEFAULT_FFMPEG_PROGRAM),
        }
    }
}

impl ConvertConfig {
    /// Checks that the configuration can produce a valid ffmpeg invocation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.bitrate.trim().is_empty() {
            return Err(CoreError::Config("bitrate must not be empty".to_string()));
        }
        if self.bitrate.chars().any(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "bitrate '{}' must not contain whitespace",
                self.bitrate
            )));
        }
        if self.ffmpeg_program.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "ffmpeg program must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
