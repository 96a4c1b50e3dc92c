use std::path::Path;

use kanal::AsyncSender;
use textlens_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::acquire;

/// Stdin watcher. Each line is either a command (`:lang <code>`, `:quit`) or
/// one or more offered file paths; a file dropped onto the terminal arrives
/// here as pasted text.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("stdin watcher stopping");
                return Ok(());
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) if line.trim() == ":quit" => {
                        tracing::info!("quit requested");
                        break;
                    }
                    Some(line) => handle_line(&line, &event_tx).await?,
                    None => {
                        tracing::info!("stdin closed");
                        break;
                    }
                }
            }
        }
    }

    // No further host input can arrive. Tell the controller, then hold this
    // task open so the pending work decides when the app stops.
    event_tx.send(AppEvent::InputClosed).await?;
    cancel.cancelled().await;
    Ok(())
}

pub(crate) async fn handle_line(
    line: &str,
    event_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    // The command needs a separator; run-on text like ":langen" is not it.
    if let Some(rest) = line.strip_prefix(":lang")
        && (rest.is_empty() || rest.starts_with(char::is_whitespace))
    {
        let code = rest.trim();
        if code.is_empty() {
            tracing::warn!("usage: :lang <code>");
        } else {
            event_tx
                .send(AppEvent::LanguageChanged(code.to_string()))
                .await?;
        }
        return Ok(());
    }

    let offered = acquire::split_offered(line);
    let Some(path) = acquire::first_offered(&offered) else {
        return Ok(());
    };

    // An unreadable path never reaches the controller; no submission intent
    // was formed.
    match acquire::load_file(Path::new(path)).await {
        Ok(file) => event_tx.send(AppEvent::FileChosen(file)).await?,
        Err(e) => tracing::warn!("{e:#}"),
    }

    Ok(())
}
