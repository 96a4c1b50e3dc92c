use textlens_types::{AppEvent, SelectedFile, UiUpdate};

use crate::events::UploadContext;
use crate::preview::PreviewHandle;
use crate::session::Session;

/// Entering Loading: swap the preview, clear the stale display, raise the
/// busy indicator, then hand the file off to the uploader.
pub async fn handle_file_chosen(
    session: &mut Session,
    context: &UploadContext,
    file: SelectedFile,
) -> anyhow::Result<()> {
    let locale = session.locale();

    let preview = PreviewHandle::new(&file);
    let source = preview.source();
    let generation = session.begin_submission(preview);

    context.updates_tx.send(UiUpdate::Preview(source)).await?;
    context.updates_tx.send(UiUpdate::Clear).await?;
    context
        .updates_tx
        .send(UiUpdate::Status {
            busy: true,
            label: locale.processing().to_string(),
        })
        .await?;

    // The language is read once here; a later toggle cannot retarget this
    // request.
    let language = session.active_language().to_string();

    tracing::debug!(generation, file = %file.name, language = %language, "submitting upload");

    let uploader = context.uploader.clone();
    let event_tx = context.event_tx.clone();
    tokio::spawn(async move {
        let outcome = uploader.submit(file, &language).await;
        let resolved = AppEvent::UploadResolved {
            generation,
            outcome,
        };
        if let Err(e) = event_tx.send(resolved).await {
            tracing::error!("failed to deliver upload outcome: {e}");
        }
    });

    Ok(())
}
