// ============================================================================
// vidaudio-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Binary
//
// This module encapsulates everything that touches the external ffmpeg
// program: the pre-flight availability probe, argument construction and the
// process-execution seam.
//
// KEY COMPONENTS:
// - ensure_available: Pre-flight check that ffmpeg can be started
// - ffmpeg: Argument building for MP3 extraction
// - ffmpeg_executor: ToolRunner trait and the std::process implementation
// - INSTALL_HINTS: Platform install instructions shown when ffmpeg is missing

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains ffmpeg argument building logic
pub mod ffmpeg;

/// Contains the trait and implementation for executing external programs
pub mod ffmpeg_executor;

/// Scriptable ToolRunner for unit tests
#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg::{FFMPEG_REFUSED_EXIT_CODE, build_audio_extract_args};
pub use ffmpeg_executor::{SystemRunner, ToolRunner};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Installation instructions printed when ffmpeg cannot be found.
pub const INSTALL_HINTS: &[&str] = &[
    "ffmpeg is not installed or not on PATH.",
    "How to install:",
    "- macOS (Homebrew): brew install ffmpeg",
    "- Ubuntu/Debian:   sudo apt-get update && sudo apt-get install -y ffmpeg",
    "- Windows (scoop):  scoop install ffmpeg",
    "- Windows (choco):  choco install ffmpeg",
    "Install it and try again.",
];

/// Checks that `program` can be started.
///
/// Runs `<program> -version` with its output discarded. Only whether the
/// process could be spawned matters; its exit status is ignored.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the program is not on the search path
/// * `CoreError::CommandStart` - the program exists but could not be started
pub fn ensure_available(program: &Path) -> CoreResult<()> {
    let name = program.display().to_string();

    let result = Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", name);
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => {
            log::debug!("Failed to start dependency check command '{}': {}", name, e);
            Err(CoreError::CommandStart(name, e))
        }
    }
}
