//! Score conversion and class ranking.

use crate::constants::percent;
use crate::error::{Error, Result};
use crate::labels::LabelSet;
use crate::report::{ClassificationReport, LabelScore};

/// Convert raw model scores in [0,1] to display percentages.
///
/// Each entry is multiplied by 100 and rounded to two decimal places
/// independently, so the total may differ from exactly 100.00. That is a
/// cosmetic artifact of per-entry rounding and is deliberately kept;
/// renormalizing would change displayed output for existing inputs.
///
/// Fails with [`Error::DimensionMismatch`] if the model produced a vector
/// whose length disagrees with the label count - never truncates or pads.
pub fn to_percentages(raw: &[f32], label_count: usize) -> Result<Vec<f32>> {
    if raw.len() != label_count {
        return Err(Error::DimensionMismatch {
            expected: label_count,
            actual: raw.len(),
        });
    }

    Ok(raw.iter().map(|&p| round_percent(p * percent::SCALE)).collect())
}

/// Round a percentage to two decimal places.
fn round_percent(value: f32) -> f32 {
    (value * percent::ROUND_FACTOR).round() / percent::ROUND_FACTOR
}

/// Rank percentage scores against a label set and build a report.
///
/// The top label is the first maximum in index order, so ties break
/// toward the lower class index. When `ground_truth` is supplied the
/// report carries `correct = (argmax == ground_truth)`; otherwise the
/// field is unset.
pub fn rank(
    scores: &[f32],
    labels: &LabelSet,
    ground_truth: Option<usize>,
) -> Result<ClassificationReport> {
    if scores.len() != labels.len() {
        return Err(Error::DimensionMismatch {
            expected: labels.len(),
            actual: scores.len(),
        });
    }
    if scores.is_empty() {
        return Err(Error::Inference {
            reason: "empty probability vector".to_string(),
        });
    }

    // First-maximum scan: a strictly greater score moves the winner.
    let mut top_index = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score > scores[top_index] {
            top_index = index;
        }
    }

    let per_label = labels
        .names()
        .iter()
        .zip(scores)
        .map(|(label, &score)| LabelScore {
            label: label.clone(),
            score,
        })
        .collect();

    Ok(ClassificationReport {
        top_label: labels.get(top_index).unwrap_or_default().to_string(),
        top_score: scores[top_index],
        top_index,
        scores: per_label,
        correct: ground_truth.map(|actual| actual == top_index),
    })
}
