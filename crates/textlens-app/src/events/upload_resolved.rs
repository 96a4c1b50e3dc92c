use textlens_core::render::{failure_message, render};
use textlens_core::state::UiState;
use textlens_types::{OcrResult, UiUpdate, UploadError};

use crate::events::UploadContext;
use crate::session::Session;

/// Apply a completed upload, unless a newer submission superseded it.
///
/// Stale outcomes are discarded without touching the busy indicator, which
/// the newer submission now owns. For the current generation the indicator
/// drops on both branches, even when emitting the rendered output failed.
pub async fn handle_upload_resolved(
    session: &mut Session,
    context: &UploadContext,
    generation: u64,
    outcome: Result<OcrResult, UploadError>,
) -> anyhow::Result<()> {
    if !session.is_current(generation) {
        tracing::debug!(generation, "discarding stale upload outcome");
        return Ok(());
    }

    let locale = session.locale();

    let shown = match outcome {
        Ok(result) => {
            let rendered = render(&result, locale);
            tracing::info!(generation, confidence = %rendered.confidence, "upload succeeded");
            session.set_ui_state(UiState::Success(result));
            context
                .updates_tx
                .send(UiUpdate::Result {
                    text: rendered.text,
                    confidence: rendered.confidence,
                })
                .await
        }
        Err(error) => {
            let message = failure_message(&error, locale);
            tracing::warn!(generation, message = %message, "upload failed");
            session.set_ui_state(UiState::Error(message.clone()));
            context.updates_tx.send(UiUpdate::Error { message }).await
        }
    };

    context
        .updates_tx
        .send(UiUpdate::Status {
            busy: false,
            label: String::new(),
        })
        .await?;

    shown?;
    Ok(())
}
