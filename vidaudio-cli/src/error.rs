// ============================================================================
// vidaudio-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type so that every fatal path maps to a
// process exit code through `CoreError::exit_code`.

// ---- Internal crate imports ----
use vidaudio_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
///
/// Context is only added to errors without a dedicated exit code, so that
/// missing inputs and a missing ffmpeg keep their variants.
pub trait CliErrorContext<T> {
    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> CliErrorContext<T> for CoreResult<T> {
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| match e {
            CoreError::Io(_) | CoreError::Walkdir(_) | CoreError::PathError(_) => {
                CoreError::PathError(format!("{}: {}", f(), e))
            }
            other => other,
        })
    }
}
