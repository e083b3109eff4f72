use console::style;
use std::path::Path;

use crate::batch::BatchResult;

/// Position of the file being converted within the batch (1-indexed).
#[derive(Clone, Copy, Debug)]
pub struct FileProgressContext {
    pub current_file: usize,
    pub total_files: usize,
}

/// Reporter interface for batch status lines.
pub trait Reporter {
    fn file_started(&self, _context: &FileProgressContext, _input: &Path, _output: &Path) {}
    fn file_skipped(&self, _context: &FileProgressContext, _output: &Path) {}
    fn file_failed(&self, _context: &FileProgressContext, _input: &Path, _code: i32) {}
    fn batch_complete(&self, _result: &BatchResult) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Human-friendly reporter that prints one line per event.
///
/// Progress, skip and summary lines go to stdout; failures go to stderr.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TerminalReporter {
    fn file_started(&self, context: &FileProgressContext, input: &Path, output: &Path) {
        println!(
            "{} converting: {} -> {}",
            style(format!("[{}/{}]", context.current_file, context.total_files)).cyan(),
            input.display(),
            output.display()
        );
    }

    fn file_skipped(&self, _context: &FileProgressContext, output: &Path) {
        println!(
            "{} output already exists (not overwriting): {}",
            style("skipped:").yellow(),
            output.display()
        );
    }

    fn file_failed(&self, _context: &FileProgressContext, input: &Path, code: i32) {
        eprintln!(
            "{} {}",
            style(format!("failed (code {code}):")).red().bold().for_stderr(),
            input.display()
        );
    }

    fn batch_complete(&self, result: &BatchResult) {
        println!("{}", style(summary_line(result)).bold());
    }
}

/// Formats the final summary line for a batch.
///
/// Skipped files count as succeeded in the failure summary.
#[must_use]
pub fn summary_line(result: &BatchResult) -> String {
    if result.failed > 0 {
        format!(
            "done: succeeded {} / failed {}",
            result.total - result.failed,
            result.failed
        )
    } else if result.skipped > 0 {
        format!(
            "done: {} file(s) converted successfully ({} skipped)",
            result.total, result.skipped
        )
    } else {
        format!("done: {} file(s) converted successfully", result.total)
    }
}
