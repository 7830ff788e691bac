use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "posts.json";

/// Configuration for posty, stored as config.json in the store directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostyConfig {
    /// Name of the collection file (e.g., "posts.json", "notes.json")
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for PostyConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl PostyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PostyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get_data_file(&self) -> &str {
        &self.data_file
    }

    /// Set the collection filename (ensures a file extension)
    pub fn set_data_file(&mut self, name: &str) {
        if name.contains('.') {
            self.data_file = name.to_string();
        } else {
            self.data_file = format!("{}.json", name);
        }
    }

    /// String-keyed accessor for the config command
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    /// String-keyed setter for the config command
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.set_data_file(value.trim());
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
