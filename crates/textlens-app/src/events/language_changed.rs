use textlens_core::language::LanguageSwitch;
use textlens_types::UiUpdate;

use crate::events::UploadContext;
use crate::session::Session;

/// Toggle handling: no-op when the code is already active, warn-and-ignore
/// for codes outside the registered set, otherwise mark it active and clear
/// the display. An in-flight request keeps the language it captured.
pub async fn handle_language_changed(
    session: &mut Session,
    context: &UploadContext,
    code: String,
) -> anyhow::Result<()> {
    match session.switch_language(&code) {
        LanguageSwitch::Unchanged => {}
        LanguageSwitch::Unregistered => {
            tracing::warn!(
                code = %code,
                registered = ?session.registered_languages(),
                "ignoring unregistered language"
            );
        }
        LanguageSwitch::Switched => {
            tracing::info!(code = %code, "language switched");
            session.clear_displayed_result();
            context.updates_tx.send(UiUpdate::Language(code)).await?;
            context.updates_tx.send(UiUpdate::Clear).await?;
        }
    }

    Ok(())
}
