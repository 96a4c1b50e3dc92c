use std::sync::Arc;

use kanal::AsyncReceiver;
use textlens_config::Config;
use textlens_types::UiUpdate;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Terminal rendition of the display surface: busy label, preview slot,
/// recognized text, confidence line and active-language marker all become
/// stdout lines.
pub struct ConsoleSurface {
    max_text_lines: u32,
}

impl ConsoleSurface {
    pub fn new(max_text_lines: u32) -> Self {
        Self { max_text_lines }
    }

    pub fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Status { busy, label } => {
                if busy {
                    println!("{label}");
                }
            }
            UiUpdate::Preview(source) => {
                println!(
                    "preview #{} ({}, {} bytes)",
                    source.id,
                    source.mime,
                    source.bytes.len()
                );
            }
            // Stdout is append-only; there is nothing to unprint.
            UiUpdate::Clear => {}
            UiUpdate::Result { text, confidence } => {
                self.print_text(&text);
                println!("[{confidence}]");
            }
            UiUpdate::Error { message } => {
                println!("error: {message}");
            }
            UiUpdate::Language(code) => {
                println!("language: {code}");
            }
        }
    }

    fn print_text(&self, text: &str) {
        let limit = self.max_text_lines as usize;
        if limit == 0 {
            println!("{text}");
            return;
        }

        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= limit {
            println!("{text}");
        } else {
            for line in &lines[..limit] {
                println!("{line}");
            }
            println!("... ({} more lines)", lines.len() - limit);
        }
    }
}

/// Drains display updates onto stdout until cancelled or the controller side
/// goes away.
pub async fn surface_loop(
    updates_rx: AsyncReceiver<UiUpdate>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let max_text_lines = { config.read().await.ui.max_text_lines };
    let mut surface = ConsoleSurface::new(max_text_lines);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                // Flush whatever the controller queued before shutdown won
                // the select, then stop.
                while let Ok(Some(update)) = updates_rx.try_recv() {
                    surface.apply(update);
                }
                tracing::info!("surface stopping");
                break;
            }
            update = updates_rx.recv() => {
                let Ok(update) = update else {
                    tracing::info!("update channel closed");
                    break;
                };
                surface.apply(update);
            }
        }
    }

    Ok(())
}
