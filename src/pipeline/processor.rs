//! Single image processing pipeline.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::inference::SpeciesClassifier;
use crate::output::{CsvReportWriter, JsonReportWriter, ReportWriter, print_breakdown};
use crate::pipeline::{output_dir_for, output_path_for};
use crate::report::ClassificationReport;
use std::path::Path;
use tracing::{debug, info};

/// Options controlling how a single image is processed.
#[derive(Debug, Clone)]
pub struct ProcessOptions<'a> {
    /// Model name recorded in report files.
    pub model_name: &'a str,
    /// Output formats to generate.
    pub formats: &'a [OutputFormat],
    /// Output directory (None = same as input).
    pub output_dir: Option<&'a Path>,
    /// Include a UTF-8 BOM in CSV output.
    pub csv_bom: bool,
    /// Print the per-label breakdown to stdout.
    pub show_breakdown: bool,
}

/// Result of processing a single image.
#[derive(Debug)]
pub struct ProcessResult {
    /// Most probable species.
    pub top_label: String,
    /// Percentage score of the most probable species.
    pub top_score: f32,
}

/// Identify the species in one image file and write report outputs.
pub fn process_file(
    input_path: &Path,
    classifier: &SpeciesClassifier,
    options: &ProcessOptions<'_>,
) -> Result<ProcessResult> {
    info!("Identifying: {}", input_path.display());

    let report = classifier.identify_file(input_path, None)?;
    info!(
        "Most probable: {} ({:.2}%)",
        report.top_label, report.top_score
    );

    if options.show_breakdown {
        print_breakdown(&report);
    }

    let out_dir = output_dir_for(input_path, options.output_dir);
    if !out_dir.exists() {
        std::fs::create_dir_all(&out_dir).map_err(|e| Error::OutputDirCreate {
            path: out_dir.clone(),
            source: e,
        })?;
    }

    for format in options.formats {
        write_output(input_path, &out_dir, *format, &report, options)?;
    }

    Ok(ProcessResult {
        top_label: report.top_label,
        top_score: report.top_score,
    })
}

/// Write a report to an output file.
fn write_output(
    input_path: &Path,
    output_dir: &Path,
    format: OutputFormat,
    report: &ClassificationReport,
    options: &ProcessOptions<'_>,
) -> Result<()> {
    let output_path = output_path_for(input_path, output_dir, format);
    debug!("Writing {} output: {}", format, output_path.display());

    let source_file = input_path
        .file_name()
        .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().to_string());

    let mut writer: Box<dyn ReportWriter> = match format {
        OutputFormat::Csv => Box::new(CsvReportWriter::new(&output_path, options.csv_bom)?),
        OutputFormat::Json => Box::new(JsonReportWriter::new(
            &output_path,
            &source_file,
            options.model_name,
        )),
    };

    writer.write_report(report)?;
    writer.finalize()
}
