//! Core library for converting MP4 video files to MP3 audio with ffmpeg.
//!
//! This crate provides input discovery, output path derivation, ffmpeg
//! invocation with outcome classification, and the sequential batch runner.
//! Decoding and encoding are done entirely by an external `ffmpeg` binary.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidaudio_core::config::ConvertConfigBuilder;
//! use vidaudio_core::reporting::TerminalReporter;
//! use vidaudio_core::{BatchRunner, SystemRunner, ensure_available, find_processable_files};
//! use std::path::{Path, PathBuf};
//!
//! let config = ConvertConfigBuilder::new()
//!     .output_dir(PathBuf::from("/path/to/audio"))
//!     .bitrate("192k")
//!     .build();
//! config.validate().unwrap();
//!
//! ensure_available(&config.ffmpeg_program).unwrap();
//! let files = find_processable_files(Path::new("/path/to/videos"), true).unwrap();
//!
//! let reporter = TerminalReporter::new();
//! let result = BatchRunner::new(SystemRunner, &config, &reporter)
//!     .run(&files, &config)
//!     .unwrap();
//! std::process::exit(result.exit_code());
//! ```

pub mod batch;
pub mod config;
pub mod conversion;
pub mod discovery;
pub mod error;
pub mod external;
pub mod output_path;
pub mod reporting;

// Re-exports for public API
pub use batch::{BatchResult, BatchRunner};
pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use conversion::{ConversionOutcome, Converter};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{INSTALL_HINTS, SystemRunner, ToolRunner, ensure_available};
pub use output_path::derive_output_path;
