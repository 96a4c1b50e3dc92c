use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use textlens_core::response::coerce_result;
use textlens_types::{OcrResult, SelectedFile, UploadError};

/// Upload seam between the controller and the network.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Submit one image with the language captured at issue time.
    async fn submit(&self, file: SelectedFile, language: &str) -> Result<OcrResult, UploadError>;
}

/// reqwest-backed client for the OCR endpoint.
///
/// No retry and no timeout beyond the transport's defaults; a failed
/// submission is terminal and the user resubmits.
#[derive(Clone)]
pub struct OcrClient {
    endpoint: String,
    client: reqwest::Client,
}

impl OcrClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Uploader for OcrClient {
    async fn submit(&self, file: SelectedFile, language: &str) -> Result<OcrResult, UploadError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = Form::new()
            .part("image", part)
            .text("language", language.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        classify_response(status, &body)
    }
}

/// Sort one response into the outcome taxonomy.
///
/// 2xx bodies must coerce into a result, anything else is `MalformedBody`.
/// Non-2xx bodies contribute their `error` field verbatim when they have
/// one; otherwise the failure stays opaque and the caller localizes it.
fn classify_response(status: StatusCode, body: &[u8]) -> Result<OcrResult, UploadError> {
    if status.is_success() {
        return serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(coerce_result)
            .ok_or(UploadError::MalformedBody);
    }

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    match message {
        Some(message) => Err(UploadError::Server(message)),
        None => Err(UploadError::OpaqueServer),
    }
}
