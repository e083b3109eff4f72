//! Output path derivation.
//!
//! An output keeps its input's file stem and takes the audio extension. It
//! lands in the requested output directory, or next to the input when no
//! directory is given.

use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Works out where the output for `input` goes, without touching the disk.
///
/// # Errors
///
/// * `CoreError::PathError` if an output directory is given and `input` has
///   no file name
pub fn planned_output_path(
    input: &Path,
    output_dir: Option<&Path>,
    extension: &str,
) -> CoreResult<PathBuf> {
    let Some(dir) = output_dir else {
        return Ok(input.with_extension(extension));
    };

    let file_name = input.file_name().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine file name for '{}'",
            input.display()
        ))
    })?;

    Ok(dir.join(file_name).with_extension(extension))
}

/// Creates `dir` and its parents. An existing directory is not an error.
///
/// # Errors
///
/// * `CoreError::PathError` if the directory cannot be created
pub fn ensure_output_dir(dir: &Path) -> CoreResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })
}

/// Derives the output path for `input`, creating `output_dir` first when one
/// is given.
///
/// # Errors
///
/// * `CoreError::PathError` if `input` has no file name or the output
///   directory cannot be created
pub fn derive_output_path(
    input: &Path,
    output_dir: Option<&Path>,
    extension: &str,
) -> CoreResult<PathBuf> {
    let output = planned_output_path(input, output_dir, extension)?;
    if let Some(dir) = output_dir {
        ensure_output_dir(dir)?;
    }
    Ok(output)
}
