//! Report type definitions.

use serde::{Deserialize, Serialize};

/// Percentage score for a single species label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Species name.
    pub label: String,
    /// Probability in percent, rounded to two decimals.
    pub score: f32,
}

/// Structured result of one inference call.
///
/// Created once per call and returned by value; it has no further
/// lifecycle. Per-label scores keep the label set's order and are not
/// renormalized after rounding, so they may not sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Most probable species.
    pub top_label: String,
    /// Percentage score of the most probable species.
    pub top_score: f32,
    /// Class index of the most probable species.
    pub top_index: usize,
    /// Per-label percentage scores in label-set order.
    pub scores: Vec<LabelScore>,
    /// Whether the prediction matched the ground truth.
    ///
    /// Present only when a ground-truth index was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}
