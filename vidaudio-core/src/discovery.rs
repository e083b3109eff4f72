//! File discovery module for finding video files to convert.
//!
//! Accepts either a single file or a directory. Directories are scanned at
//! the top level, or through the whole tree when recursion is requested.
//! Only regular files whose extension is `.mp4` (case-insensitive) are kept,
//! and the result is sorted by path so batch runs are reproducible.

use crate::config::INPUT_EXTENSION;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if the path carries the supported input extension.
#[must_use]
pub fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Finds the input files to convert under `target`.
///
/// * A regular file yields itself if its extension matches, otherwise nothing.
/// * A directory yields its matching regular files; with `recursive` set,
///   subdirectories are searched as well.
///
/// An empty result is not an error here; the batch runner decides what an
/// empty batch means.
///
/// # Errors
///
/// * `CoreError::InputNotFound` if `target` does not exist
/// * `CoreError::Walkdir` if the target directory cannot be read; unreadable
///   entries below it are logged and skipped
pub fn find_processable_files(target: &Path, recursive: bool) -> CoreResult<Vec<PathBuf>> {
    if !target.exists() {
        return Err(CoreError::InputNotFound(target.to_path_buf()));
    }

    if target.is_file() {
        return Ok(if has_input_extension(target) {
            vec![target.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut walker = WalkDir::new(target).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    let mut skipped_count = 0usize;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The target itself could not be read.
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", target.display(), e);
                continue;
            }
        };
        let path = entry.path();
        // is_file follows symlinks, so a link to a video counts as a video.
        if !path.is_file() {
            continue;
        }
        if has_input_extension(path) {
            files.push(entry.into_path());
        } else {
            skipped_count += 1;
        }
    }

    files.sort();

    if skipped_count > 0 {
        log::debug!(
            "Skipped {} non-{} files in {}",
            skipped_count,
            INPUT_EXTENSION,
            target.display()
        );
    }
    log::debug!(
        "Found {} {} file(s) in {} (recursive: {})",
        files.len(),
        INPUT_EXTENSION,
        target.display(),
        recursive
    );

    Ok(files)
}
