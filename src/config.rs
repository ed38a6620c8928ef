//! Configuration model for quill.
//!
//! This module defines the Config struct that represents an optional
//! `quill.yaml` next to the working directory. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for every
//! field, and validation of config values. CLI flags override config values
//! at the command layer.

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory when no
/// `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quill.yaml";

/// Configuration for article generation.
///
/// Every field has a default, so an empty (or absent) config file yields a
/// working setup against a local Ollama with `llama3:8b` pulled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model backend settings
    // =========================================================================
    /// Model tag to generate with (must be pulled in Ollama).
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    // =========================================================================
    // Sampling settings
    // =========================================================================
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Context window size in tokens.
    #[serde(default = "default_num_ctx")]
    pub num_ctx: u32,

    /// Nucleus-sampling threshold.
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Repetition penalty.
    #[serde(default = "default_repeat_penalty")]
    pub repeat_penalty: f32,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Directory where generated articles are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    // =========================================================================
    // Prompt defaults
    // =========================================================================
    /// Audience description used when `--audience` is not given.
    #[serde(default = "default_audience")]
    pub default_audience: String,

    /// Geographic focus used when `--geo` is not given.
    #[serde(default = "default_geo")]
    pub default_geo: String,
}

// Default value functions for serde
fn default_model() -> String {
    "llama3:8b".to_string()
}
fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_temperature() -> f32 {
    0.4
}
fn default_num_ctx() -> u32 {
    8192
}
fn default_top_p() -> f32 {
    0.9
}
fn default_repeat_penalty() -> f32 {
    1.1
}
fn default_output_dir() -> String {
    "output".to_string()
}
fn default_audience() -> String {
    "beginner bloggers and content marketers".to_string()
}
fn default_geo() -> String {
    "global".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            num_ctx: default_num_ctx(),
            top_p: default_top_p(),
            repeat_penalty: default_repeat_penalty(),
            output_dir: default_output_dir(),
            default_audience: default_audience(),
            default_geo: default_geo(),
        }
    }
}

impl Config {
    /// Resolve the effective config.
    ///
    /// An explicit path must exist and parse; without one, `quill.yaml` in
    /// the working directory is used when present, and built-in defaults
    /// otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuillError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| QuillError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| QuillError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `model`, `base_url`, and `output_dir` must be non-empty
    /// - `temperature` must be within 0.0..=2.0
    /// - `top_p` must be within 0.0..=1.0
    /// - `num_ctx` must be positive
    /// - `repeat_penalty` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(QuillError::UserError(
                "config validation failed: model must be non-empty".to_string(),
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err(QuillError::UserError(
                "config validation failed: base_url must be non-empty".to_string(),
            ));
        }

        if self.output_dir.trim().is_empty() {
            return Err(QuillError::UserError(
                "config validation failed: output_dir must be non-empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QuillError::UserError(format!(
                "config validation failed: temperature must be within 0.0..=2.0 (found {})",
                self.temperature
            )));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(QuillError::UserError(format!(
                "config validation failed: top_p must be within 0.0..=1.0 (found {})",
                self.top_p
            )));
        }

        if self.num_ctx == 0 {
            return Err(QuillError::UserError(
                "config validation failed: num_ctx must be greater than 0".to_string(),
            ));
        }

        if self.repeat_penalty <= 0.0 {
            return Err(QuillError::UserError(format!(
                "config validation failed: repeat_penalty must be greater than 0 (found {})",
                self.repeat_penalty
            )));
        }

        Ok(())
    }
}
