// ============================================================================
// vidaudio-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// Status lines (progress, skips, failures, summary) are printed by the
// reporter and never go through the logger. The logger only carries
// diagnostics, written to stderr:
// - default: warnings and errors
// - --verbose: debug output (ffmpeg command lines, discovery counts)
// - RUST_LOG: overrides both

use log::LevelFilter;
use std::io::Write;

/// Returns the log level selected by the verbose flag.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes the global logger. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = level_for(verbose);
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level_str, record.args())
        })
        .filter_level(level)
        .parse_default_env()
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", level);
    }
}
