//! CSV report writer.

use crate::constants::UTF8_BOM;
use crate::error::Result;
use crate::output::ReportWriter;
use crate::report::ClassificationReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-label CSV report writer.
pub struct CsvReportWriter {
    writer: BufWriter<File>,
    bom: bool,
}

impl CsvReportWriter {
    /// Create a new CSV writer.
    pub fn new(path: &Path, bom: bool) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            bom,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()> {
        if self.bom {
            self.writer.write_all(UTF8_BOM)?;
        }
        writeln!(self.writer, "Species,Probability (%),Top")?;

        for (index, entry) in report.scores.iter().enumerate() {
            writeln!(
                self.writer,
                "{},{:.2},{}",
                escape_csv(&entry.label),
                entry.score,
                index == report.top_index,
            )?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::LabelScore;
    use tempfile::NamedTempFile;

    fn sample_report() -> ClassificationReport {
        ClassificationReport {
            top_label: "Fly Agaric".to_string(),
            top_score: 70.0,
            top_index: 0,
            scores: vec![
                LabelScore {
                    label: "Fly Agaric".to_string(),
                    score: 70.0,
                },
                LabelScore {
                    label: "Morel".to_string(),
                    score: 30.0,
                },
            ],
            correct: None,
        }
    }

    #[test]
    fn test_csv_writer_basic() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = CsvReportWriter::new(file.path(), false).unwrap();

        writer.write_report(&sample_report()).unwrap();
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("Species,Probability (%),Top"));
        assert!(contents.contains("Fly Agaric,70.00,true"));
        assert!(contents.contains("Morel,30.00,false"));
    }

    #[test]
    fn test_csv_writer_bom() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = CsvReportWriter::new(file.path(), true).unwrap();

        writer.write_report(&sample_report()).unwrap();
        writer.finalize().unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
