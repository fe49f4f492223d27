//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the model checkpoint
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Path to the serialized tokenizer
    #[serde(default = "default_tokenizer_path")]
    pub tokenizer_path: PathBuf,

    /// Path to the optional model configuration blob
    #[serde(default = "default_model_config_path")]
    pub model_config_path: PathBuf,

    /// Sequence length when the model config blob does not provide one
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,

    /// Alerting configuration
    #[serde(default)]
    pub alerting: AlertingConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config: Self = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &cli.model {
            config.model_path = model.clone();
        }

        if let Some(tokenizer) = &cli.tokenizer {
            config.tokenizer_path = tokenizer.clone();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            tokenizer_path: default_tokenizer_path(),
            model_config_path: default_model_config_path(),
            max_sequence_length: default_max_sequence_length(),
            alerting: AlertingConfig::default(),
        }
    }
}

/// Alerting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Retained errors that trigger an alert
    #[serde(default = "default_error_threshold")]
    pub error_threshold: usize,

    /// Trailing error window, in minutes
    #[serde(default = "default_time_window_minutes")]
    pub time_window_minutes: u64,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            error_threshold: default_error_threshold(),
            time_window_minutes: default_time_window_minutes(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/sentiment_lstm.safetensors")
}

fn default_tokenizer_path() -> PathBuf {
    PathBuf::from("models/tokenizer.json")
}

fn default_model_config_path() -> PathBuf {
    PathBuf::from("models/model_config.json")
}

fn default_max_sequence_length() -> usize {
    50
}

fn default_error_threshold() -> usize {
    3
}

fn default_time_window_minutes() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.max_sequence_length, 50);
        assert_eq!(config.alerting.error_threshold, 3);
        assert_eq!(config.alerting.time_window_minutes, 5);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
model_path: "artifacts/model.safetensors"
alerting:
  error_threshold: 5
"#;
        let config: ServerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model_path, PathBuf::from("artifacts/model.safetensors"));
        assert_eq!(config.alerting.error_threshold, 5);
        // Unspecified fields keep their defaults.
        assert_eq!(config.alerting.time_window_minutes, 5);
        assert_eq!(config.tokenizer_path, PathBuf::from("models/tokenizer.json"));
    }
}
