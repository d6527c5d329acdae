//! Calculator configuration
//!
//! The compiled-in default allows Roman operands. A TOML file is read only
//! when one is passed explicitly on the command line.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Prompt printed before reading the expression
pub const DEFAULT_PROMPT: &str = "Введите выражение (например, III + V или 3 + 5): ";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub calculator: CalculatorSection,
}

/// Calculator section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatorSection {
    /// Accept expressions where both operands are Roman numerals
    #[serde(default = "default_allow_roman")]
    pub allow_roman: bool,
    /// Prompt shown before reading input
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_allow_roman() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for CalculatorSection {
    fn default() -> Self {
        Self {
            allow_roman: default_allow_roman(),
            prompt: default_prompt(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CalculatorConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calculator.prompt.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "calculator.prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Same configuration with Roman operands disabled
    pub fn arabic_only(mut self) -> Self {
        self.calculator.allow_roman = false;
        self
    }
}
