use std::env;

use serde::{Deserialize, Serialize};

fn default_max_text_lines() -> u32 {
    0
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Cap on printed result lines; 0 disables truncation.
    #[serde(default = "default_max_text_lines")]
    pub max_text_lines: u32,
}

impl UiConfig {
    pub fn new() -> Self {
        let max_text_lines = env::var("MAX_TEXT_LINES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_text_lines);

        Self { max_text_lines }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_text_lines: default_max_text_lines(),
        }
    }
}
