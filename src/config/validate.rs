//! Configuration validation.

use crate::config::{Config, ModelConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    // Default model must exist if specified
    if let Some(ref model_name) = config.defaults.model
        && !config.models.contains_key(model_name)
    {
        return Err(Error::ModelNotFound {
            name: model_name.clone(),
        });
    }

    for (name, model) in &config.models {
        if model.input_width == 0 || model.input_height == 0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "model '{name}' has zero input size ({}x{})",
                    model.input_width, model.input_height
                ),
            });
        }
    }

    Ok(())
}

/// Validate a model configuration and check files exist.
pub fn validate_model_config(_name: &str, model: &ModelConfig) -> Result<()> {
    if !model.path.exists() {
        return Err(Error::ModelFileNotFound {
            path: model.path.clone(),
        });
    }

    if !model.labels.exists() {
        return Err(Error::LabelsFileNotFound {
            path: model.labels.clone(),
        });
    }

    Ok(())
}

/// Get a model by name from the config.
pub fn get_model<'a>(config: &'a Config, name: &str) -> Result<&'a ModelConfig> {
    config.models.get(name).ok_or_else(|| Error::ModelNotFound {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_model() -> ModelConfig {
        ModelConfig {
            path: PathBuf::from("/models/mi_13.onnx"),
            labels: PathBuf::from("/models/species_list.csv"),
            input_width: 200,
            input_height: 200,
        }
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_missing_default_model() {
        let mut config = Config::default();
        config.defaults.model = Some("nonexistent".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(Error::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_validate_zero_input_size() {
        let mut config = Config::default();
        let mut model = sample_model();
        model.input_width = 0;
        config.models.insert("bad".to_string(), model);

        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_model_config_missing_files() {
        let result = validate_model_config("mi-13", &sample_model());
        assert!(matches!(result, Err(Error::ModelFileNotFound { .. })));
    }

    #[test]
    fn test_get_model_not_found() {
        let config = Config::default();
        assert!(matches!(
            get_model(&config, "missing"),
            Err(Error::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_get_model_found() {
        let mut config = Config::default();
        config.models.insert("mi-13".to_string(), sample_model());
        assert!(get_model(&config, "mi-13").is_ok());
    }
}
