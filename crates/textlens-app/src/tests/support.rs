use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use textlens_client::Uploader;
use textlens_config::Config;
use textlens_types::{AppEvent, OcrResult, Segment, SelectedFile, UiUpdate, UploadError};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// One scripted reply for the fake uploader.
pub struct Scripted {
    pub delay: Option<Duration>,
    pub outcome: Result<OcrResult, UploadError>,
}

impl Scripted {
    pub fn now(outcome: Result<OcrResult, UploadError>) -> Self {
        Self {
            delay: None,
            outcome,
        }
    }

    pub fn after(delay: Duration, outcome: Result<OcrResult, UploadError>) -> Self {
        Self {
            delay: Some(delay),
            outcome,
        }
    }
}

/// Replays a script of replies in order and records every submission.
pub struct FakeUploader {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeUploader {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Languages captured per submission, in order.
    pub fn languages(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, language)| language.clone())
            .collect()
    }
}

#[async_trait]
impl Uploader for FakeUploader {
    async fn submit(&self, file: SelectedFile, language: &str) -> Result<OcrResult, UploadError> {
        self.requests
            .lock()
            .unwrap()
            .push((file.name.clone(), language.to_string()));
        let scripted = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        scripted.outcome
    }
}

/// Event loop under test, wired to a scripted uploader.
pub struct Harness {
    pub intents: AsyncSender<AppEvent>,
    pub updates: AsyncReceiver<UiUpdate>,
    pub cancel: CancellationToken,
    pub loop_task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.language.default = "zh".to_string();
    config.language.registered = vec!["zh".to_string(), "en".to_string()];
    config
}

pub fn spawn_controller(uploader: Arc<FakeUploader>, config: Config) -> Harness {
    let state = Arc::new(AppState::new(config));
    let (intent_tx, intent_rx) = kanal::bounded_async::<AppEvent>(64);
    let (update_tx, update_rx) = kanal::bounded_async::<UiUpdate>(256);
    let cancel = CancellationToken::new();

    let uploader: Arc<dyn Uploader> = uploader;
    let loop_task = tokio::spawn(event_loop(
        state,
        intent_rx,
        intent_tx.clone(),
        update_tx,
        uploader,
        cancel.clone(),
    ));

    Harness {
        intents: intent_tx,
        updates: update_rx,
        cancel,
        loop_task,
    }
}

/// Receive the next display update, failing the test on a stall.
pub async fn next_update(harness: &Harness) -> UiUpdate {
    timeout(Duration::from_secs(2), harness.updates.recv())
        .await
        .expect("timed out waiting for a display update")
        .expect("update channel closed")
}

/// Consume the startup language marker every session begins with.
pub async fn consume_startup(harness: &Harness) -> String {
    match next_update(harness).await {
        UiUpdate::Language(code) => code,
        other => panic!("expected the startup language marker, got {other:?}"),
    }
}

/// Collect updates until the channel stays quiet for `quiet`.
pub async fn drain_updates(harness: &Harness, quiet: Duration) -> Vec<UiUpdate> {
    let mut collected = Vec::new();
    while let Ok(Ok(update)) = timeout(quiet, harness.updates.recv()).await {
        collected.push(update);
    }
    collected
}

pub fn sample_file(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        mime: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

pub fn ocr_result(text: &str, confidences: &[f64]) -> OcrResult {
    OcrResult {
        text: text.to_string(),
        segments: confidences
            .iter()
            .map(|&confidence| Segment { confidence })
            .collect(),
        average_confidence: None,
    }
}
