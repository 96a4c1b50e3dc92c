use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use textlens_client::Uploader;
use textlens_types::{AppEvent, UiUpdate};
use tokio_util::sync::CancellationToken;

use crate::session::Session;
use crate::state::AppState;

pub mod file_chosen;
pub mod language_changed;
pub mod upload_resolved;

use file_chosen::handle_file_chosen;
use language_changed::handle_language_changed;
use upload_resolved::handle_upload_resolved;

/// Shared handles the intent handlers need.
pub struct UploadContext {
    pub uploader: Arc<dyn Uploader>,
    pub event_tx: AsyncSender<AppEvent>,
    pub updates_tx: AsyncSender<UiUpdate>,
}

/// App's main loop: the single dispatch point for every intent, and the only
/// place session state is touched.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    event_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<UiUpdate>,
    uploader: Arc<dyn Uploader>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        Session::new(&config)
    };

    let context = UploadContext {
        uploader,
        event_tx,
        updates_tx: app_to_ui_tx,
    };

    // Startup marks the default language active on the surface.
    context
        .updates_tx
        .send(UiUpdate::Language(session.active_language().to_string()))
        .await?;

    tracing::info!(
        language = session.active_language(),
        registered = ?session.registered_languages(),
        "event loop ready"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop stopping");
                break;
            }
            event = ui_to_app_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("intent channel closed");
                    break;
                };
                tracing::debug!(event = ?std::mem::discriminant(&event), "intent received");
                handle_event(&mut session, &context, event).await?;
                if session.should_stop() {
                    tracing::info!("input closed and work settled, stopping");
                    break;
                }
            }
        }
    }

    Ok(())
}

async fn handle_event(
    session: &mut Session,
    context: &UploadContext,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::FileChosen(file) => handle_file_chosen(session, context, file).await,
        AppEvent::LanguageChanged(code) => handle_language_changed(session, context, code).await,
        AppEvent::InputClosed => {
            tracing::info!("host input closed");
            session.close_input();
            Ok(())
        }
        AppEvent::UploadResolved {
            generation,
            outcome,
        } => handle_upload_resolved(session, context, generation, outcome).await,
    }
}
