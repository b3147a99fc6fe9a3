//! Batch evaluation over a labeled manifest.
//!
//! Applies the identification pipeline to every example in a held-out set
//! and collects predicted-vs-actual index pairs - the raw input for
//! confusion matrices and count comparisons. No aggregation happens here
//! beyond correctness bookkeeping; this is a loop, not a component.

use crate::error::{Error, Result};
use crate::inference::SpeciesClassifier;
use crate::labels::LabelSet;
use crate::output::progress;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// One evaluated example.
#[derive(Debug, Clone)]
pub struct EvalRecord {
    /// Path to the image file.
    pub file: PathBuf,
    /// Ground-truth class index from the manifest.
    pub actual_index: usize,
    /// Predicted class index.
    pub predicted_index: usize,
    /// Percentage score of the predicted class.
    pub top_score: f32,
    /// Whether prediction matched ground truth.
    pub correct: bool,
}

/// Outcome of evaluating a full manifest.
#[derive(Debug)]
pub struct EvaluationOutcome {
    /// Per-example records in manifest order.
    pub records: Vec<EvalRecord>,
    /// Number of correct predictions.
    pub correct: usize,
}

impl EvaluationOutcome {
    /// Total number of evaluated examples.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Fraction of correct predictions in [0,1].
    pub fn accuracy(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.correct as f64 / self.records.len() as f64
            }
        }
    }
}

/// Row shape for evaluation manifests.
#[derive(Debug, Deserialize)]
struct ManifestRow {
    file: PathBuf,
    species: String,
}

/// Evaluate every example in a manifest CSV (`file,species` columns).
///
/// Relative file paths are resolved against the manifest's directory.
/// A species name missing from the classifier's label set is an error,
/// as is any image or inference failure - partial results are not kept.
pub fn run_evaluation(
    manifest_path: &Path,
    classifier: &SpeciesClassifier,
    progress_enabled: bool,
) -> Result<EvaluationOutcome> {
    let entries = read_manifest(manifest_path, classifier.labels())?;
    info!(
        "Evaluating {} example(s) from {}",
        entries.len(),
        manifest_path.display()
    );

    let progress = progress::create_image_progress(entries.len(), progress_enabled);
    let mut records = Vec::with_capacity(entries.len());
    let mut correct = 0;

    for (file, actual_index) in entries {
        let report = classifier.identify_file(&file, Some(actual_index))?;
        let is_correct = report.correct == Some(true);
        if is_correct {
            correct += 1;
        }

        records.push(EvalRecord {
            file,
            actual_index,
            predicted_index: report.top_index,
            top_score: report.top_score,
            correct: is_correct,
        });
        progress::inc_progress(progress.as_ref());
    }

    progress::finish_progress(progress, "Evaluation complete");

    let outcome = EvaluationOutcome { records, correct };
    info!(
        "Evaluation: {}/{} correct ({:.1}%)",
        outcome.correct,
        outcome.total(),
        outcome.accuracy() * 100.0
    );

    Ok(outcome)
}

/// Read and resolve a manifest into `(file, class index)` pairs.
fn read_manifest(path: &Path, labels: &LabelSet) -> Result<Vec<(PathBuf, usize)>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut entries = Vec::new();

    for row in reader.deserialize::<ManifestRow>() {
        let row = row.map_err(|e| Error::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let index = labels
            .index_of(row.species.trim())
            .ok_or_else(|| Error::UnknownSpecies {
                name: row.species.clone(),
                path: path.to_path_buf(),
            })?;

        let file = if row.file.is_absolute() {
            row.file
        } else {
            base.join(row.file)
        };
        entries.push((file, index));
    }

    Ok(entries)
}

/// Write evaluation records to a CSV file.
pub fn write_evaluation_csv(
    outcome: &EvaluationOutcome,
    labels: &LabelSet,
    path: &Path,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::EvaluationWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: csv::Error| Error::EvaluationWrite {
        path: path.to_path_buf(),
        source: e,
    };

    writer
        .write_record(["file", "actual", "predicted", "correct", "top_score"])
        .map_err(write_err)?;

    for record in &outcome.records {
        writer
            .write_record([
                record.file.to_string_lossy().as_ref(),
                labels.get(record.actual_index).unwrap_or_default(),
                labels.get(record.predicted_index).unwrap_or_default(),
                if record.correct { "true" } else { "false" },
                &format!("{:.2}", record.top_score),
            ])
            .map_err(write_err)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::inference::Model;
    use ndarray::ArrayView4;

    struct StubModel;

    impl Model for StubModel {
        fn forward(&self, _input: ArrayView4<'_, f32>) -> Result<Vec<f32>> {
            // Always predicts the first class.
            Ok(vec![0.9, 0.1])
        }
    }

    fn stub_classifier() -> SpeciesClassifier {
        SpeciesClassifier::new(
            Box::new(StubModel),
            LabelSet::new(vec!["Fly Agaric".to_string(), "Morel".to_string()]),
            8,
            8,
        )
    }

    fn write_image(path: &Path) {
        image::RgbImage::from_pixel(10, 10, image::Rgb([100, 100, 100]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_run_evaluation_counts_correct() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("a.png"));
        write_image(&dir.path().join("b.png"));

        let manifest = dir.path().join("manifest.csv");
        std::fs::write(
            &manifest,
            "file,species\na.png,Fly Agaric\nb.png,Morel\n",
        )
        .unwrap();

        let outcome = run_evaluation(&manifest, &stub_classifier(), false).unwrap();
        assert_eq!(outcome.total(), 2);
        assert_eq!(outcome.correct, 1);
        assert_eq!(outcome.accuracy(), 0.5);

        assert!(outcome.records[0].correct);
        assert_eq!(outcome.records[0].predicted_index, 0);
        assert!(!outcome.records[1].correct);
        assert_eq!(outcome.records[1].actual_index, 1);
    }

    #[test]
    fn test_run_evaluation_unknown_species() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("a.png"));

        let manifest = dir.path().join("manifest.csv");
        std::fs::write(&manifest, "file,species\na.png,Destroying Angel\n").unwrap();

        let result = run_evaluation(&manifest, &stub_classifier(), false);
        assert!(matches!(result, Err(Error::UnknownSpecies { .. })));
    }

    #[test]
    fn test_write_evaluation_csv() {
        let dir = tempfile::tempdir().unwrap();
        let labels = LabelSet::new(vec!["Fly Agaric".to_string(), "Morel".to_string()]);

        let outcome = EvaluationOutcome {
            records: vec![EvalRecord {
                file: PathBuf::from("a.png"),
                actual_index: 1,
                predicted_index: 0,
                top_score: 90.0,
                correct: false,
            }],
            correct: 0,
        };

        let out = dir.path().join("results.csv");
        write_evaluation_csv(&outcome, &labels, &out).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        assert!(contents.starts_with("file,actual,predicted,correct,top_score"));
        assert!(contents.contains("a.png,Morel,Fly Agaric,false,90.00"));
    }

    #[test]
    fn test_accuracy_empty_outcome() {
        let outcome = EvaluationOutcome {
            records: vec![],
            correct: 0,
        };
        assert_eq!(outcome.accuracy(), 0.0);
    }
}
