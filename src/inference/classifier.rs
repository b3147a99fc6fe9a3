//! Species classifier tying image preparation, forward pass, and ranking together.

use crate::config::{InferenceDevice, ModelConfig};
use crate::error::Result;
use crate::imaging;
use crate::inference::{Model, OrtModel};
use crate::labels::LabelSet;
use crate::report::{self, ClassificationReport};
use image::DynamicImage;
use std::path::Path;
use tracing::info;

/// Mushroom species classifier.
///
/// Holds the loaded model, the label set it was trained against, and the
/// input size its first layer expects. Identification is synchronous; each
/// call fully completes before returning and shares no mutable state with
/// other calls.
pub struct SpeciesClassifier {
    model: Box<dyn Model>,
    labels: LabelSet,
    input_width: u32,
    input_height: u32,
}

impl SpeciesClassifier {
    /// Build a classifier from a configured model entry.
    pub fn from_config(model_config: &ModelConfig, device: InferenceDevice) -> Result<Self> {
        let labels = LabelSet::load(&model_config.labels)?;
        let model = OrtModel::load(&model_config.path, device)?;

        info!(
            "Loaded model: {} ({} species, {}x{} input)",
            model_config.path.display(),
            labels.len(),
            model_config.input_width,
            model_config.input_height,
        );

        Ok(Self::new(
            Box::new(model),
            labels,
            model_config.input_width,
            model_config.input_height,
        ))
    }

    /// Build a classifier from an already-loaded model.
    pub fn new(model: Box<dyn Model>, labels: LabelSet, input_width: u32, input_height: u32) -> Self {
        Self {
            model,
            labels,
            input_width,
            input_height,
        }
    }

    /// The label set this classifier ranks against.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Model input size as `(width, height)`.
    pub fn input_size(&self) -> (u32, u32) {
        (self.input_width, self.input_height)
    }

    /// Identify the species in a decoded image.
    ///
    /// Runs prepare -> forward -> percentage conversion -> ranking. When
    /// `ground_truth` (a class index) is supplied, the report carries a
    /// correctness flag.
    pub fn identify(
        &self,
        image: &DynamicImage,
        ground_truth: Option<usize>,
    ) -> Result<ClassificationReport> {
        let tensor = imaging::prepare(image, self.input_width, self.input_height)?;
        let raw = self.model.forward(tensor.view())?;
        let scores = report::to_percentages(&raw, self.labels.len())?;
        report::rank(&scores, &self.labels, ground_truth)
    }

    /// Decode an image file and identify the species in it.
    pub fn identify_file(
        &self,
        path: &Path,
        ground_truth: Option<usize>,
    ) -> Result<ClassificationReport> {
        let image = imaging::load_image(path)?;
        self.identify(&image, ground_truth)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::ArrayView4;

    /// Model stub that returns a fixed score vector and records the input shape.
    struct StubModel {
        output: Vec<f32>,
    }

    impl Model for StubModel {
        fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>> {
            assert_eq!(input.shape()[0], 1);
            assert_eq!(input.shape()[3], 3);
            Ok(self.output.clone())
        }
    }

    fn classifier_with(output: Vec<f32>, labels: Vec<&str>) -> SpeciesClassifier {
        SpeciesClassifier::new(
            Box::new(StubModel { output }),
            LabelSet::new(labels.into_iter().map(String::from).collect()),
            20,
            20,
        )
    }

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            40,
            30,
            image::Rgb([90, 60, 30]),
        ))
    }

    #[test]
    fn test_identify_ranks_scores() {
        let classifier = classifier_with(vec![0.7, 0.2, 0.1], vec!["A", "B", "C"]);
        let report = classifier.identify(&test_image(), None).unwrap();

        assert_eq!(report.top_label, "A");
        assert_eq!(report.top_score, 70.0);
        assert_eq!(
            report.scores.iter().map(|s| s.score).collect::<Vec<_>>(),
            vec![70.0, 20.0, 10.0]
        );
        assert!(report.correct.is_none());
    }

    #[test]
    fn test_identify_with_ground_truth() {
        let classifier = classifier_with(vec![0.1, 0.8, 0.1], vec!["A", "B", "C"]);

        let report = classifier.identify(&test_image(), Some(1)).unwrap();
        assert_eq!(report.correct, Some(true));

        let report = classifier.identify(&test_image(), Some(2)).unwrap();
        assert_eq!(report.correct, Some(false));
    }

    #[test]
    fn test_identify_dimension_mismatch_fails() {
        // 19 scores against a 20-entry label set must never truncate or pad.
        let labels: Vec<String> = (0..20).map(|i| format!("Species {i}")).collect();
        let classifier = SpeciesClassifier::new(
            Box::new(StubModel {
                output: vec![0.05; 19],
            }),
            LabelSet::new(labels),
            20,
            20,
        );

        let result = classifier.identify(&test_image(), None);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 20,
                actual: 19
            })
        ));
    }

    #[test]
    fn test_identify_file_rejects_bad_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"garbage").unwrap();

        let classifier = classifier_with(vec![1.0], vec!["A"]);
        let result = classifier.identify_file(&path, None);
        assert!(matches!(result, Err(Error::ImageDecode { .. })));
    }
}
