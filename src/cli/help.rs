//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print help message based on configuration state.
pub fn print_smart_help(config: &Config) {
    if config.models.is_empty() {
        print_first_time_help();
    } else {
        print_configured_help();
    }
}

/// Print detailed setup guide for first-time users.
pub fn print_first_time_help() {
    println!("No configuration found. Get started with Fungid:");
    println!();
    println!("1. Initialize configuration:");
    println!("   fungid config init");
    println!();
    println!("2. Obtain an ONNX classifier and its species labels file.");
    println!("   Any image classifier exported to ONNX works; labels are either");
    println!("   one species per line or a CSV with a 'common_name' column.");
    println!();
    println!("3. Add your model to configuration:");
    println!("   fungid models add mushrooms-v1 --path ./model.onnx --labels ./species.csv --default");
    println!();
    println!("4. Identify mushroom photos:");
    println!("   fungid photo.jpg");
    println!();
    println!("IMPORTANT: Models are subject to their respective licenses. You are responsible");
    println!("for ensuring your use complies with each model's license terms.");
    println!();
    println!("Run 'fungid -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: fungid [FILES]... [OPTIONS]");
    println!();
    println!("Example: fungid photo.jpg -m mushrooms-v1 -f csv,json");
    println!();
    println!("Run 'fungid -h' for all options or 'fungid models list' to see configured models.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_smart_help_first_time_path() {
        let config = Config {
            models: HashMap::new(),
            ..Default::default()
        };
        assert!(config.models.is_empty());
    }

    #[test]
    fn test_smart_help_configured_path() {
        use crate::config::ModelConfig;
        use std::path::PathBuf;

        let mut models = HashMap::new();
        models.insert(
            "mushrooms-v1".to_string(),
            ModelConfig {
                path: PathBuf::from("/tmp/model.onnx"),
                labels: PathBuf::from("/tmp/species.csv"),
                input_width: 200,
                input_height: 200,
            },
        );

        let config = Config {
            models,
            ..Default::default()
        };
        assert!(!config.models.is_empty());
    }
}
