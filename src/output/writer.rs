//! Output writer trait definition.

use crate::error::Result;
use crate::report::ClassificationReport;

/// Trait for writing classification reports.
pub trait ReportWriter {
    /// Write a single classification report.
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}
