// ============================================================================
// vidaudio-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ConvertConfig
//
// This module implements a fluent builder for ConvertConfig. Every field has
// a default, so a bare `ConvertConfigBuilder::new().build()` yields a usable
// configuration that writes outputs next to their inputs at 192k.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::ConvertConfig;

/// Builder for creating ConvertConfig instances.
///
/// # Examples
///
/// ```rust
/// use vidaudio_core::config::ConvertConfigBuilder;
///
/// let config = ConvertConfigBuilder::new()
///     .bitrate("128k")
///     .ffmpeg_program("/opt/ffmpeg/bin/ffmpeg")
///     .build();
///
/// assert!(config.output_dir.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.config.output_dir = Some(output_dir);
        self
    }

    /// Sets the output directory from an optional value.
    pub fn maybe_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.config.output_dir = output_dir;
        self
    }

    /// Sets the audio bitrate.
    pub fn bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.config.bitrate = bitrate.into();
        self
    }

    /// Sets whether existing outputs are overwritten.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.config.overwrite = overwrite;
        self
    }

    /// Sets the ffmpeg program name or path.
    pub fn ffmpeg_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.config.ffmpeg_program = program.into();
        self
    }

    /// Builds the ConvertConfig instance.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let config = ConvertConfigBuilder::new()
            .output_dir(PathBuf::from("out"))
            .bitrate("320k")
            .overwrite(true)
            .ffmpeg_program("/usr/local/bin/ffmpeg")
            .build();

        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.bitrate, "320k");
        assert!(config.overwrite);
        assert_eq!(config.ffmpeg_program, PathBuf::from("/usr/local/bin/ffmpeg"));
    }

    #[test]
    fn maybe_output_dir_clears_directory() {
        let config = ConvertConfigBuilder::new()
            .output_dir(PathBuf::from("out"))
            .maybe_output_dir(None)
            .build();
        assert!(config.output_dir.is_none());
    }
}
