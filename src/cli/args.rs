//! CLI argument definitions.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Mushroom species identification from photos using ONNX models.
#[derive(Debug, Parser)]
#[command(name = "fungid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input images or directories to identify.
    pub inputs: Vec<PathBuf>,

    /// Common options for identification.
    #[command(flatten)]
    pub identify: IdentifyArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage models.
    Models {
        /// Models action to perform.
        #[command(subcommand)]
        action: ModelsAction,
    },
    /// Evaluate a model against a labeled manifest.
    Evaluate {
        /// Manifest CSV with `file,species` columns.
        manifest: PathBuf,
        /// Model name from configuration.
        #[arg(short, long, env = "FUNGID_MODEL")]
        model: Option<String>,
        /// Output CSV path (default: next to the manifest).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Enable CUDA GPU acceleration.
        #[arg(long, conflicts_with = "cpu")]
        gpu: bool,
        /// Force CPU inference.
        #[arg(long, conflicts_with = "gpu")]
        cpu: bool,
        /// Disable the progress bar.
        #[arg(long)]
        no_progress: bool,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Models subcommand actions.
#[derive(Debug, Subcommand)]
pub enum ModelsAction {
    /// List configured models.
    List,
    /// Add a new model to configuration.
    Add {
        /// Name for this model (e.g., "mushrooms-v1").
        name: String,
        /// Path to the ONNX model file.
        #[arg(long)]
        path: PathBuf,
        /// Path to the labels file (one species per line, or CSV with a `common_name` column).
        #[arg(long)]
        labels: PathBuf,
        /// Model input width in pixels.
        #[arg(long)]
        input_width: Option<u32>,
        /// Model input height in pixels.
        #[arg(long)]
        input_height: Option<u32>,
        /// Set as the default model.
        #[arg(long)]
        default: bool,
    },
    /// Verify model files exist.
    Check,
}

/// Arguments for the identify command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct IdentifyArgs {
    /// Model name from configuration.
    #[arg(short, long, env = "FUNGID_MODEL")]
    pub model: Option<String>,

    /// Output formats (comma-separated: csv,json).
    #[arg(short, long, value_delimiter = ',', env = "FUNGID_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "FUNGID_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable CUDA GPU acceleration.
    #[arg(long, conflicts_with = "cpu")]
    pub gpu: bool,

    /// Force CPU inference.
    #[arg(long, conflicts_with = "gpu")]
    pub cpu: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress the per-image probability breakdown.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace+ORT info, -vvv: trace+ORT debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
