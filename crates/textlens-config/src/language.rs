use std::env;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "zh".to_string()
}

fn default_registered() -> Vec<String> {
    vec!["zh".to_string(), "en".to_string()]
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LanguageConfig {
    /// Code active at startup.
    #[serde(default = "default_language")]
    pub default: String,
    /// Codes the language toggles offer. The set is configuration, not
    /// something the controller hard-codes.
    #[serde(default = "default_registered")]
    pub registered: Vec<String>,
}

impl LanguageConfig {
    pub fn new() -> Self {
        let default = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| default_language());

        let registered = env::var("REGISTERED_LANGUAGES")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|codes| !codes.is_empty())
            .unwrap_or_else(default_registered);

        Self {
            default,
            registered,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
            registered: default_registered(),
        }
    }
}
