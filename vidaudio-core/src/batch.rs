//! Sequential batch conversion.
//!
//! The runner walks the discovered inputs in order, derives each output
//! path, converts the file and tallies the outcome. A failing file never
//! stops the batch; every input is attempted exactly once.

use crate::config::{ConvertConfig, OUTPUT_EXTENSION};
use crate::conversion::{ConversionOutcome, Converter};
use crate::error::{CoreError, CoreResult, EXIT_FAILURE};
use crate::external::ffmpeg_executor::ToolRunner;
use crate::output_path::{ensure_output_dir, planned_output_path};
use crate::reporting::{FileProgressContext, Reporter};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Aggregate counts for a completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl BatchResult {
    /// Process exit code for this batch: 0 unless any file failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 { EXIT_FAILURE } else { 0 }
    }
}

/// Drives a `Converter` over a list of inputs.
pub struct BatchRunner<'a, R: ToolRunner> {
    converter: Converter<R>,
    reporter: &'a dyn Reporter,
}

impl<'a, R: ToolRunner> BatchRunner<'a, R> {
    /// Creates a runner that executes `config.ffmpeg_program` via `runner`.
    pub fn new(runner: R, config: &ConvertConfig, reporter: &'a dyn Reporter) -> Self {
        Self {
            converter: Converter::new(runner, config.ffmpeg_program.clone()),
            reporter,
        }
    }

    /// Converts every input in order and returns the aggregate result.
    ///
    /// # Errors
    ///
    /// * `CoreError::NoFilesFound` if `inputs` is empty; nothing is run
    pub fn run(&self, inputs: &[PathBuf], config: &ConvertConfig) -> CoreResult<BatchResult> {
        if inputs.is_empty() {
            return Err(CoreError::NoFilesFound);
        }

        let start = Instant::now();
        let total = inputs.len();
        let mut succeeded = 0;
        let mut skipped = 0;
        let mut failed = 0;

        log::debug!(
            "Starting batch of {} file(s) at bitrate {} (overwrite: {})",
            total,
            config.bitrate,
            config.overwrite
        );

        for (index, input) in inputs.iter().enumerate() {
            let context = FileProgressContext {
                current_file: index + 1,
                total_files: total,
            };

            let output_dir = config.output_dir.as_deref();
            let outcome = match planned_output_path(input, output_dir, OUTPUT_EXTENSION) {
                Ok(output) => {
                    self.reporter.file_started(&context, input, &output);
                    self.convert_one(&context, input, &output, config)
                }
                Err(e) => {
                    log::debug!("No output path for {}: {}", input.display(), e);
                    eprintln!("{}", e);
                    ConversionOutcome::Failed(EXIT_FAILURE)
                }
            };

            match outcome {
                ConversionOutcome::Success => succeeded += 1,
                ConversionOutcome::SkippedExisting => skipped += 1,
                ConversionOutcome::Failed(code) => {
                    failed += 1;
                    self.reporter.file_failed(&context, input, code);
                }
            }
        }

        let result = BatchResult {
            total,
            succeeded,
            skipped,
            failed,
            elapsed: start.elapsed(),
        };

        log::debug!(
            "Batch finished in {:.2?}: {} succeeded, {} skipped, {} failed",
            result.elapsed,
            succeeded,
            skipped,
            failed
        );
        self.reporter.batch_complete(&result);

        Ok(result)
    }

    /// Creates the output directory if needed, then runs the conversion.
    fn convert_one(
        &self,
        context: &FileProgressContext,
        input: &Path,
        output: &Path,
        config: &ConvertConfig,
    ) -> ConversionOutcome {
        if let Some(Err(e)) = config.output_dir.as_deref().map(ensure_output_dir) {
            log::debug!("Output directory unusable for {}: {}", input.display(), e);
            eprintln!("{}", e);
            return ConversionOutcome::Failed(EXIT_FAILURE);
        }

        let outcome = self
            .converter
            .convert(input, output, &config.bitrate, config.overwrite);
        if outcome == ConversionOutcome::SkippedExisting {
            self.reporter.file_skipped(context, output);
        }
        outcome
    }
}
