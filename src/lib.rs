//! Fungid - Mushroom species identification CLI tool.
//!
//! This crate classifies mushroom photographs with ONNX image models and
//! writes per-image probability reports.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod imaging;
pub mod inference;
pub mod labels;
pub mod output;
pub mod pipeline;
pub mod report;

use clap::Parser;
use cli::{Cli, Command, IdentifyArgs};
use config::{
    Config, InferenceDevice, ModelConfig, config_file_path, load_default_config,
    save_default_config,
};
use inference::SpeciesClassifier;
use pipeline::{ProcessOptions, collect_input_files, process_file};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for fungid CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.identify.verbose, cli.identify.quiet);

    let config = load_default_config()?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Default: identify files
    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&config);
        std::process::exit(0);
    }

    identify_files(&cli.inputs, &cli.identify, &config)
}

/// Identify input images with the given options.
fn identify_files(inputs: &[PathBuf], args: &IdentifyArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoValidImageFiles);
    }

    info!("Found {} image file(s) to identify", files.len());

    config::validate_config(config)?;
    let model_name = resolve_model_name(args.model.clone(), config)?;
    let model_config = config::get_model(config, &model_name)?;

    let formats = args
        .format
        .clone()
        .unwrap_or_else(|| config.defaults.formats.clone());
    let device = resolve_device(args.gpu, args.cpu, config);

    info!("Loading model: {}", model_name);
    let classifier = SpeciesClassifier::from_config(model_config, device)?;

    let progress_enabled = !args.quiet && !args.no_progress;
    // The breakdown and the progress bar fight over the terminal, so the
    // breakdown is only shown for interactive single runs.
    let show_breakdown = !args.quiet && files.len() == 1;
    let file_progress =
        progress::create_image_progress(files.len(), progress_enabled && files.len() > 1);

    let mut processed = 0;
    let mut errors = 0;

    for file in &files {
        let options = ProcessOptions {
            model_name: &model_name,
            formats: &formats,
            output_dir: args.output_dir.as_deref(),
            csv_bom: config.defaults.csv_bom,
            show_breakdown,
        };

        match process_file(file, &classifier, &options) {
            Ok(result) => {
                processed += 1;
                info!(
                    "{}: {} ({:.2}%)",
                    file.display(),
                    result.top_label,
                    result.top_score
                );
            }
            Err(e) => {
                error!("Failed to identify {}: {}", file.display(), e);
                errors += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} identified, {} errors in {:.2}s",
        processed, errors, total_duration
    );

    if errors > 0 && !args.fail_fast {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

/// Pick the model name from CLI args or config defaults.
fn resolve_model_name(explicit: Option<String>, config: &Config) -> Result<String> {
    explicit
        .or_else(|| config.defaults.model.clone())
        .ok_or_else(|| Error::ConfigValidation {
            message: "no model specified (use -m or set defaults.model in config)".to_string(),
        })
}

/// Pick the inference device from CLI flags or config.
fn resolve_device(gpu: bool, cpu: bool, config: &Config) -> InferenceDevice {
    if gpu {
        InferenceDevice::Gpu
    } else if cpu {
        InferenceDevice::Cpu
    } else {
        config.inference.device
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // ORT logging is suppressed by default because CUDA fallback is expected
    // in auto mode. Use -v to see ORT warnings, -vv for info, -vvv for trace.
    let filter_str = if quiet {
        "warn,ort=off".to_string()
    } else {
        match verbose {
            0 => "info,ort=off".to_string(),
            1 => "debug,ort=warn".to_string(),
            2 => "trace,ort=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Models { action } => handle_models_command(action, config),
        Command::Evaluate {
            manifest,
            model,
            output,
            gpu,
            cpu,
            no_progress,
        } => handle_evaluate_command(&manifest, model, output, gpu, cpu, no_progress, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
                println!("Use 'fungid models add' to add models.");
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!(
                    "  fungid models add <name> --path <model.onnx> --labels <species.csv> --default"
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout)]
fn handle_models_command(action: cli::ModelsAction, config: &Config) -> Result<()> {
    use cli::ModelsAction;

    match action {
        ModelsAction::List => {
            if config.models.is_empty() {
                println!("No models configured.");
            } else {
                println!("Configured models:");
                for (name, model) in &config.models {
                    let default_marker = config.defaults.model.as_ref().is_some_and(|d| d == name);
                    println!(
                        "  {} ({}x{}){}",
                        name,
                        model.input_width,
                        model.input_height,
                        if default_marker { " [default]" } else { "" }
                    );
                }
            }
            Ok(())
        }
        ModelsAction::Add {
            name,
            path,
            labels,
            input_width,
            input_height,
            default,
        } => handle_models_add(name, path, labels, input_width, input_height, default),
        ModelsAction::Check => {
            for (name, model) in &config.models {
                config::validate_model_config(name, model)?;
                println!("  {name}: OK");
            }
            Ok(())
        }
    }
}

/// Handle the `models add` command.
#[allow(clippy::print_stdout)]
fn handle_models_add(
    name: String,
    path: PathBuf,
    labels: PathBuf,
    input_width: Option<u32>,
    input_height: Option<u32>,
    set_default: bool,
) -> Result<()> {
    if !path.exists() {
        return Err(Error::ModelFileNotFound { path });
    }
    if !labels.exists() {
        return Err(Error::LabelsFileNotFound { path: labels });
    }

    let mut config = load_default_config()?;

    if config.models.contains_key(&name) {
        return Err(Error::ModelAlreadyExists { name });
    }

    let model = ModelConfig {
        path: path.clone(),
        labels: labels.clone(),
        input_width: input_width.unwrap_or(constants::DEFAULT_INPUT_WIDTH),
        input_height: input_height.unwrap_or(constants::DEFAULT_INPUT_HEIGHT),
    };
    config.models.insert(name.clone(), model);

    if set_default {
        config.defaults.model = Some(name.clone());
    }

    let config_path = save_default_config(&config)?;

    println!("Added model '{name}'");
    println!("  Model: {}", path.display());
    println!("  Labels: {}", labels.display());
    println!("  Default: {}", if set_default { "yes" } else { "no" });
    println!("\nConfiguration saved to: {}", config_path.display());

    Ok(())
}

/// Handle the `evaluate` subcommand.
#[allow(clippy::print_stdout)]
fn handle_evaluate_command(
    manifest: &std::path::Path,
    model: Option<String>,
    output: Option<PathBuf>,
    gpu: bool,
    cpu: bool,
    no_progress: bool,
    config: &Config,
) -> Result<()> {
    use crate::constants::output_extensions;
    use crate::pipeline::{run_evaluation, write_evaluation_csv};

    config::validate_config(config)?;
    let model_name = resolve_model_name(model, config)?;
    let model_config = config::get_model(config, &model_name)?;
    let device = resolve_device(gpu, cpu, config);

    info!("Loading model: {}", model_name);
    let classifier = SpeciesClassifier::from_config(model_config, device)?;

    let outcome = run_evaluation(manifest, &classifier, !no_progress)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = manifest
            .file_stem()
            .map_or_else(|| "evaluation".to_string(), |s| s.to_string_lossy().into_owned());
        manifest.with_file_name(format!("{stem}{}", output_extensions::EVALUATION))
    });
    write_evaluation_csv(&outcome, classifier.labels(), &output_path)?;

    println!(
        "Evaluated {} image(s): {} correct ({:.1}%)",
        outcome.total(),
        outcome.correct,
        outcome.accuracy() * 100.0
    );
    println!("Results written to: {}", output_path.display());

    Ok(())
}
