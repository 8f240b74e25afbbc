use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prompt string drawn before the input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Maximum number of command lines kept for up/down recall.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Maximum number of rows kept for scrollback panning.
    #[serde(default = "default_scrollback_capacity")]
    pub scrollback_capacity: usize,
}

fn default_prompt() -> String {
    "brine$ ".to_string()
}

fn default_history_capacity() -> usize {
    32
}

fn default_scrollback_capacity() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_capacity: default_history_capacity(),
            scrollback_capacity: default_scrollback_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
