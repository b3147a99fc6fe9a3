//! Species label set loading.
//!
//! A label set is an ordered list of species names whose position is the
//! class index of the model's output vector. The order must stay in
//! lock-step with the order used at training time; that invariant cannot
//! be verified at runtime.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered, fixed sequence of species names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    names: Vec<String>,
}

/// Row shape for CSV label files.
#[derive(Debug, Deserialize)]
struct LabelRow {
    common_name: String,
}

impl LabelSet {
    /// Create a label set from an ordered list of names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a label set from a file.
    ///
    /// # File Format
    /// - `.csv` files must have a header row with a `common_name` column
    /// - any other extension is read as one species name per line
    /// - blank lines and surrounding whitespace are ignored
    pub fn load(path: &Path) -> Result<Self> {
        let csv_format = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let names = if csv_format {
            read_csv_labels(path)?
        } else {
            read_line_labels(path)?
        };

        if names.is_empty() {
            return Err(Error::EmptyLabelSet {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { names })
    }

    /// Number of labels (the model's expected output dimensionality).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the label set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the label at a class index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Find the class index for a species name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// All labels in class-index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Read one species name per line, skipping blanks.
fn read_line_labels(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::LabelsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut names = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::LabelsRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }

    Ok(names)
}

/// Read species names from the `common_name` column of a CSV file.
fn read_csv_labels(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::LabelsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut names = Vec::new();
    for row in reader.deserialize::<LabelRow>() {
        let row = row.map_err(|e| Error::LabelsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let trimmed = row.common_name.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }

    Ok(names)
}
