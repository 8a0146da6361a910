// This file contains the batch layer: converting one collection file, or every collection in a directory,
// and reporting progress to an optional sink.

use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::collection::parse_collection_file;
use crate::convert::{convert_collection, format_commands};
use crate::utils::{ensure_directory_exists, list_files_with_extension, output_path_for, write_to_file};
use crate::{AppError, Result};

/// Receives progress events for a conversion run. Every method defaults to doing nothing.
pub trait ProgressSink {
    fn run_started(&self, _input_dir: &Path, _file_count: usize) {}

    fn file_started(&self, _input: &Path) {}

    fn file_converted(&self, _converted: &ConvertedFile) {}

    fn file_failed(&self, _input: &Path, _error: &AppError) {}

    fn run_finished(&self, _report: &ConversionReport) {}
}

/// Forwards progress events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn run_started(&self, input_dir: &Path, file_count: usize) {
        info!("Converting {} collection(s) from {}", file_count, input_dir.display());
    }

    fn file_started(&self, input: &Path) {
        info!("Processing file: {}", input.display());
    }

    fn file_converted(&self, converted: &ConvertedFile) {
        info!(
            "{} cURL command(s) have been saved to {}",
            converted.command_count,
            converted.output.display()
        );
    }

    fn file_failed(&self, input: &Path, error: &AppError) {
        error!("Failed to convert {}: {}", input.display(), error);
    }

    fn run_finished(&self, report: &ConversionReport) {
        info!(
            "Process completed: {} converted, {} failed",
            report.converted.len(),
            report.failed.len()
        );
    }
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Extension of the collection files to pick up
    pub input_ext: String,
    /// Extension given to the generated files
    pub output_ext: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            input_ext: "json".to_string(),
            output_ext: "txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub command_count: usize,
}

#[derive(Debug)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: AppError,
}

/// Outcome of converting a directory of collections
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert one collection file into `output_dir`.
///
/// The output file is written only once the whole collection has been rendered.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    output_ext: &str,
    sink: Option<&dyn ProgressSink>,
) -> Result<ConvertedFile> {
    let input = input.as_ref();
    if let Some(sink) = sink {
        sink.file_started(input);
    }

    let result = render_file(input, output_dir.as_ref(), output_ext);
    if let Some(sink) = sink {
        match &result {
            Ok(converted) => sink.file_converted(converted),
            Err(err) => sink.file_failed(input, err),
        }
    }
    result
}

fn render_file(input: &Path, output_dir: &Path, output_ext: &str) -> Result<ConvertedFile> {
    let collection = parse_collection_file(input)?;
    let commands = convert_collection(&collection)?;

    let output = output_path_for(input, output_dir, output_ext);
    write_to_file(&output, format_commands(&commands))?;

    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output,
        command_count: commands.len(),
    })
}

/// Convert every matching collection in `input_dir`.
///
/// A failing file is recorded in the report and the run moves on to the next one.
/// Only failing to prepare the output directory or list the input directory aborts the run.
pub fn convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    options: &BatchOptions,
    sink: Option<&dyn ProgressSink>,
) -> Result<ConversionReport> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    ensure_directory_exists(output_dir)?;
    let inputs = list_files_with_extension(input_dir, &options.input_ext)?;
    if let Some(sink) = sink {
        sink.run_started(input_dir, inputs.len());
    }

    let mut report = ConversionReport::default();
    for input in inputs {
        match convert_file(&input, output_dir, &options.output_ext, sink) {
            Ok(converted) => report.converted.push(converted),
            Err(error) => report.failed.push(FailedFile { input, error }),
        }
    }

    if let Some(sink) = sink {
        sink.run_finished(&report);
    }
    Ok(report)
}
