//! Report output writers.

mod csv;
mod display;
mod json;
pub mod progress;
mod writer;

pub use csv::CsvReportWriter;
pub use display::print_breakdown;
pub use json::{JsonReportFile, JsonReportWriter};
pub use writer::ReportWriter;
