//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "fungid";

/// Default model input width in pixels.
pub const DEFAULT_INPUT_WIDTH: u32 = 200;

/// Default model input height in pixels.
pub const DEFAULT_INPUT_HEIGHT: u32 = 200;

/// Supported image file extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Percentage conversion constants.
pub mod percent {
    /// Multiplier from model scores in [0,1] to percent.
    pub const SCALE: f32 = 100.0;

    /// Factor used to round percentages to two decimal places.
    pub const ROUND_FACTOR: f32 = 100.0;

    /// Maximum per-entry deviation introduced by two-decimal rounding.
    pub const MAX_ROUNDING_ERROR: f32 = 0.005;
}

/// Output file extensions by format.
pub mod output_extensions {
    /// CSV report extension.
    pub const CSV: &str = ".fungid.results.csv";
    /// JSON report extension.
    pub const JSON: &str = ".fungid.json";
    /// Evaluation results extension (appended to the manifest stem).
    pub const EVALUATION: &str = ".evaluation.csv";
}

/// UTF-8 Byte Order Mark for Excel compatibility in CSV files.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
