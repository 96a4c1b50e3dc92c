use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    // local dev default
    "http://127.0.0.1:5000/api/ocr".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// OCR endpoint receiving the multipart POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl UploadConfig {
    pub fn new() -> Self {
        let endpoint = env::var("OCR_ENDPOINT").unwrap_or_else(|_| default_endpoint());

        Self { endpoint }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}
