//! ffmpeg argument construction for audio extraction.
//!
//! The argument list is fixed apart from the paths, the bitrate and the
//! overwrite policy:
//!
//! ```text
//! -hide_banner -loglevel error (-y|-n) -i <input> -vn -acodec libmp3lame -b:a <bitrate> <output>
//! ```

use crate::config::AUDIO_CODEC;

use std::ffi::OsString;
use std::path::Path;

/// Exit code ffmpeg uses when `-n` makes it refuse to replace an existing
/// output. Other failures use the same code, so callers must confirm the
/// output actually exists before treating it as a refusal.
pub const FFMPEG_REFUSED_EXIT_CODE: i32 = 1;

/// Builds the arguments for extracting MP3 audio from `input` into `output`.
#[must_use]
pub fn build_audio_extract_args(
    input: &Path,
    output: &Path,
    bitrate: &str,
    overwrite: bool,
) -> Vec<OsString> {
    let overwrite_flag = if overwrite { "-y" } else { "-n" };

    vec![
        OsString::from("-hide_banner"),
        OsString::from("-loglevel"),
        OsString::from("error"),
        OsString::from(overwrite_flag),
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-vn"),
        OsString::from("-acodec"),
        OsString::from(AUDIO_CODEC),
        OsString::from("-b:a"),
        OsString::from(bitrate),
        output.as_os_str().to_os_string(),
    ]
}
