//! Implementation of the conversion run.
//!
//! Order of operations: check that ffmpeg can be started, validate the
//! configuration, check the input path, discover inputs, then hand the batch
//! to vidaudio-core. Every fatal error is turned into a message on stderr and a
//! process exit code here.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

use vidaudio_core::config::{ConvertConfig, ConvertConfigBuilder};
use vidaudio_core::reporting::TerminalReporter;
use vidaudio_core::{
    BatchResult, BatchRunner, CoreError, INSTALL_HINTS, SystemRunner, ensure_available,
    find_processable_files,
};

use log::debug;

/// Creates and validates the core configuration from CLI arguments.
pub fn create_convert_config(cli: &Cli) -> CliResult<ConvertConfig> {
    let config = ConvertConfigBuilder::new()
        .maybe_output_dir(cli.output_dir.clone())
        .bitrate(cli.bitrate.clone())
        .overwrite(cli.overwrite)
        .ffmpeg_program(cli.ffmpeg.clone())
        .build();
    config.validate()?;
    Ok(config)
}

/// Runs the whole conversion and returns the batch result.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` / `CoreError::CommandStart` - ffmpeg unusable
/// * `CoreError::Config` - invalid settings such as an empty bitrate
/// * `CoreError::InputNotFound` - the input path does not exist
/// * `CoreError::NoFilesFound` - nothing to convert
pub fn convert(cli: &Cli) -> CliResult<BatchResult> {
    ensure_available(&cli.ffmpeg)?;

    let config = create_convert_config(cli)?;

    if !cli.input.exists() {
        return Err(CoreError::InputNotFound(cli.input.clone()));
    }

    let files = find_processable_files(&cli.input, cli.recursive)
        .cli_with_context(|| "Error during file discovery")?;
    debug!("Discovered {} file(s) under {}", files.len(), cli.input.display());

    let reporter = TerminalReporter::new();
    BatchRunner::new(SystemRunner, &config, &reporter).run(&files, &config)
}

/// Prints the diagnostic for a fatal error to stderr.
pub fn report_fatal_error(error: &CoreError) {
    match error {
        CoreError::DependencyNotFound(_) => {
            eprintln!("{}", INSTALL_HINTS.join("\n"));
        }
        CoreError::CommandStart(..) => {
            eprintln!("{error}");
            eprintln!("{}", INSTALL_HINTS.join("\n"));
        }
        _ => eprintln!("{error}"),
    }
}

/// Runs the conversion and maps the result to a process exit code.
pub fn run_convert(cli: &Cli) -> i32 {
    match convert(cli) {
        Ok(result) => result.exit_code(),
        Err(e) => {
            debug!("Run aborted: {:?}", e);
            report_fatal_error(&e);
            e.exit_code()
        }
    }
}
