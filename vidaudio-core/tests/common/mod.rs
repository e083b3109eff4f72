// Shared helpers for integration tests that need a stand-in ffmpeg.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes an executable `ffmpeg` replacement into `dir` and returns its path.
///
/// The script answers `-version`, exits 69 for inputs whose path contains
/// "broken", honours `-n` by exiting 1 when the output exists, and otherwise
/// writes a small text file to the output path. Every conversion attempt
/// appends its input path to `calls.log` next to the script.
pub fn install_fake_ffmpeg(dir: &Path) -> PathBuf {
    let script_path = dir.join("ffmpeg");
    let log_path = dir.join("calls.log");
    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "-version" ]; then
  echo "ffmpeg version fake"
  exit 0
fi
for last; do :; done
out="$last"
overwrite=no
input=""
bitrate=""
prev=""
for arg in "$@"; do
  if [ "$arg" = "-y" ]; then overwrite=yes; fi
  if [ "$prev" = "-i" ]; then input="$arg"; fi
  if [ "$prev" = "-b:a" ]; then bitrate="$arg"; fi
  prev="$arg"
done
echo "$input" >> '{log}'
case "$input" in
  *broken*) echo "Invalid data found when processing input" >&2; exit 69 ;;
esac
if [ -e "$out" ] && [ "$overwrite" = no ]; then
  echo "File '$out' already exists. Exiting." >&2
  exit 1
fi
printf 'audio from %s at %s\n' "$input" "$bitrate" > "$out"
exit 0
"#,
        log = log_path.display()
    );
    fs::write(&script_path, script).expect("Failed to write fake ffmpeg");
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake ffmpeg executable");
    script_path
}

/// Returns the input paths the fake ffmpeg was called with, in order.
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .map(|log| log.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Creates a dummy input file and returns its path.
pub fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, b"dummy content").expect("Failed to create dummy file");
    file_path
}
