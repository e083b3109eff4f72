// ============================================================================
// vidaudio-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for vidaudio-core
//
// This module defines the error type shared by the core library and the CLI.
// Each variant corresponds to one of the fatal paths of a run; per-file
// conversion failures are not errors and are carried by `ConversionOutcome`.
//
// KEY COMPONENTS:
// - CoreError: Enum of all fatal error kinds
// - CoreResult: Type alias for Result with CoreError
// - CoreError::exit_code: Mapping from error kind to process exit code

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when the input path does not exist.
pub const EXIT_INPUT_NOT_FOUND: i32 = 2;

/// Exit code used when the external media tool cannot be found.
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Exit code for every other fatal error and for batches with failures.
pub const EXIT_FAILURE: i32 = 1;

/// Custom error type for vidaudio-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Input path not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No files found to convert")]
    NoFilesFound,

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

impl CoreError {
    /// Returns the process exit code that reports this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::InputNotFound(_) => EXIT_INPUT_NOT_FOUND,
            CoreError::DependencyNotFound(_) | CoreError::CommandStart(..) => EXIT_TOOL_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

/// Type alias for Result with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
