use crate::error::{Result, ScopeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DEFINITIONS_FILE: &str = "filters.json";
const DEFAULT_STATE_FILE: &str = "state.json";

/// Per-scope configuration, stored in `.scopefilter/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeConfig {
    /// File holding the filter definitions, relative to the scope directory
    #[serde(default = "default_definitions_file")]
    pub definitions_file: String,

    /// File holding the persisted filter state
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Indent JSON written by `emit`
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_definitions_file() -> String {
    DEFAULT_DEFINITIONS_FILE.to_string()
}

fn default_state_file() -> String {
    DEFAULT_STATE_FILE.to_string()
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            definitions_file: default_definitions_file(),
            state_file: default_state_file(),
            pretty_json: false,
        }
    }
}

impl ScopeConfig {
    pub const KEYS: [&'static str; 3] = ["definitions-file", "state-file", "pretty-json"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ScopeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "definitions-file" => Some(self.definitions_file.clone()),
            "state-file" => Some(self.state_file.clone()),
            "pretty-json" => Some(self.pretty_json.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "definitions-file" => self.definitions_file = file_name(key, value)?,
            "state-file" => self.state_file = file_name(key, value)?,
            "pretty-json" => {
                self.pretty_json = value.parse().map_err(|_| {
                    ScopeError::Config(format!("{} expects true or false, got {}", key, value))
                })?
            }
            _ => return Err(ScopeError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn file_name(key: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(ScopeError::Config(format!(
            "{} must be a plain file name, got '{}'",
            key, value
        )));
    }
    Ok(trimmed.to_string())
}
