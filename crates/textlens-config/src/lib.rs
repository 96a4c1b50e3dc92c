use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::language::LanguageConfig;
use self::ui::UiConfig;
use self::upload::UploadConfig;

pub mod language;
pub mod ui;
pub mod upload;

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub upload: UploadConfig,
    pub language: LanguageConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build from environment variables, falling back to code defaults.
    pub fn new() -> Self {
        Config {
            upload: UploadConfig::new(),
            language: LanguageConfig::new(),
            ui: UiConfig::new(),
        }
    }

    /// Load from a JSON file; missing sections fall back to code defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Resolve configuration: an explicit `TEXTLENS_CONFIG` path first, then
    /// `./config.json`, then environment variables.
    pub fn load() -> Self {
        if let Ok(path) = env::var("TEXTLENS_CONFIG") {
            match Self::from_file(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("failed to load config from {path}: {e}, falling back")
                }
            }
        }

        if Path::new("config.json").exists() {
            match Self::from_file("config.json") {
                Ok(config) => return config,
                Err(e) => tracing::warn!("failed to load config.json: {e}, falling back"),
            }
        }

        Self::new()
    }
}
