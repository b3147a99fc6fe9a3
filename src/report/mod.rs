//! Class ranking and report generation.

mod rank;
mod types;

pub use rank::{rank, to_percentages};
pub use types::{ClassificationReport, LabelScore};
