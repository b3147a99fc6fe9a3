//! Error types for fungid.

/// Result type alias for fungid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fungid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Model not found in configuration.
    #[error("model '{name}' not found in configuration")]
    ModelNotFound {
        /// Name of the missing model.
        name: String,
    },

    /// Model file does not exist.
    #[error("model file does not exist: {path}")]
    ModelFileNotFound {
        /// Path to the missing model file.
        path: std::path::PathBuf,
    },

    /// Labels file does not exist.
    #[error("labels file does not exist: {path}")]
    LabelsFileNotFound {
        /// Path to the missing labels file.
        path: std::path::PathBuf,
    },

    /// Model already exists in configuration.
    #[error("model '{name}' already exists in configuration")]
    ModelAlreadyExists {
        /// Name of the existing model.
        name: String,
    },

    /// No valid image files found.
    #[error("no valid image files found in the provided paths")]
    NoValidImageFiles,

    /// Image file could not be decoded.
    #[error("failed to decode image '{path}'")]
    ImageDecode {
        /// Path to the image file.
        path: std::path::PathBuf,
        /// Underlying decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Image is unusable for inference.
    #[error("invalid image: {reason}")]
    InvalidImage {
        /// Description of why the image was rejected.
        reason: String,
    },

    /// Model artifact could not be loaded or deserialized.
    #[error("failed to load model '{path}'")]
    ModelLoad {
        /// Path to the model file.
        path: std::path::PathBuf,
        /// Underlying load error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to initialize the ONNX runtime.
    #[error("failed to initialize ONNX runtime: {reason}")]
    RuntimeInitialization {
        /// Description of the initialization failure.
        reason: String,
    },

    /// Model output cardinality disagrees with the configured label count.
    #[error("model output length {actual} does not match label count {expected}")]
    DimensionMismatch {
        /// Expected number of scores (label count).
        expected: usize,
        /// Actual number of scores produced by the model.
        actual: usize,
    },

    /// Inference failed.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the inference failure.
        reason: String,
    },

    /// Failed to read labels file.
    #[error("failed to read labels file '{path}'")]
    LabelsRead {
        /// Path to the labels file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse labels file.
    #[error("failed to parse labels file '{path}': {message}")]
    LabelsParse {
        /// Path to the labels file.
        path: std::path::PathBuf,
        /// Description of the parse failure.
        message: String,
    },

    /// Labels file contained no labels.
    #[error("labels file '{path}' contains no labels")]
    EmptyLabelSet {
        /// Path to the labels file.
        path: std::path::PathBuf,
    },

    /// Failed to read evaluation manifest.
    #[error("failed to read manifest '{path}'")]
    ManifestRead {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Manifest references a species missing from the label set.
    #[error("manifest '{path}' references unknown species '{name}'")]
    UnknownSpecies {
        /// Species name from the manifest.
        name: String,
        /// Path to the manifest file.
        path: std::path::PathBuf,
    },

    /// Failed to write evaluation results.
    #[error("failed to write evaluation results '{path}'")]
    EvaluationWrite {
        /// Path to the evaluation output file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Failed to write JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
