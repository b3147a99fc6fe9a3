//! JSON report writer.

use crate::error::{Error, Result};
use crate::output::ReportWriter;
use crate::report::ClassificationReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// JSON result file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReportFile {
    /// Source image file name.
    pub source_file: String,
    /// Identification timestamp.
    pub analysis_date: DateTime<Utc>,
    /// Model used for identification.
    pub model: String,
    /// Classification result.
    pub report: ClassificationReport,
}

/// Writer for JSON report output files.
pub struct JsonReportWriter {
    output_path: PathBuf,
    source_file: String,
    model: String,
    report: Option<ClassificationReport>,
}

impl JsonReportWriter {
    /// Create a new JSON report writer.
    pub fn new(output_path: &Path, source_file: &str, model: &str) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            source_file: source_file.to_string(),
            model: model.to_string(),
            report: None,
        }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()> {
        self.report = Some(report.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let Some(report) = self.report.take() else {
            return Ok(());
        };

        let result = JsonReportFile {
            source_file: self.source_file.clone(),
            analysis_date: Utc::now(),
            model: self.model.clone(),
            report,
        };

        let file = File::create(&self.output_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &result).map_err(|e| Error::JsonWrite {
            path: self.output_path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
