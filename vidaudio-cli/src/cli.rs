// vidaudio-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use vidaudio_core::config::{DEFAULT_BITRATE, DEFAULT_FFMPEG_PROGRAM};

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidaudio: Convert MP4 video files to MP3 audio",
    long_about = "Extracts the audio track of MP4 files as MP3 using an installed ffmpeg. \
                  Accepts a single file or a directory of files."
)]
pub struct Cli {
    /// Input MP4 file or directory containing MP4 files
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the MP3 files (defaults to each input file's directory)
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Audio bitrate passed to ffmpeg (e.g. 128k, 192k, 256k)
    #[arg(
        short = 'b',
        long,
        value_name = "RATE",
        default_value = DEFAULT_BITRATE,
        env = "VIDAUDIO_BITRATE"
    )]
    pub bitrate: String,

    /// Search subdirectories when INPUT is a directory
    #[arg(short = 'r', long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite MP3 files that already exist
    #[arg(short = 'y', long, default_value_t = false)]
    pub overwrite: bool,

    /// ffmpeg executable to run
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_FFMPEG_PROGRAM,
        env = "VIDAUDIO_FFMPEG"
    )]
    pub ffmpeg: PathBuf,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parses arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses arguments from an explicit iterator (used by tests).
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
