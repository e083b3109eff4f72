//! Main entry point for the vidaudio CLI application.
//!
//! Parses arguments, sets up logging and exits with the code produced by the
//! conversion run.

use vidaudio_cli::logging::init_logging;
use vidaudio_cli::{parse_cli, run_convert};

use std::process;

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let code = run_convert(&cli);
    process::exit(code);
}
