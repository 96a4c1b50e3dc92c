use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use kanal::AsyncSender;
use textlens_client::{OcrClient, Uploader};
use textlens_config::Config;
use textlens_types::AppEvent;
use tokio::signal;
use tokio::task::JoinSet;

mod acquire;
mod controller;
mod events;
mod io;
mod preview;
mod session;
mod state;
mod surface;

#[cfg(test)]
mod tests;

use controller::AppController;
use state::AppState;

/// Terminal client for a remote OCR service: hand it an image, get the
/// recognized text and a confidence summary back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to submit immediately on startup
    image: Option<PathBuf>,

    /// Language code to start with (must be registered)
    #[arg(long)]
    language: Option<String>,

    /// OCR endpoint override
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(endpoint) = args.endpoint {
        config.upload.endpoint = endpoint;
    }
    if let Some(language) = args.language {
        if config.language.registered.iter().any(|code| *code == language) {
            config.language.default = language;
        } else {
            tracing::warn!(code = %language, "--language is not registered, keeping default");
        }
    }

    let endpoint = config.upload.endpoint.clone();
    tracing::info!(endpoint = %endpoint, "starting textlens");

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    // Queued before the tasks start, so it is dispatched ahead of the
    // end-of-input a closed stdin raises immediately.
    if let Some(path) = &args.image {
        submit_startup_image(&controller.intent_sender(), path).await;
    }

    let uploader: Arc<dyn Uploader> = Arc::new(OcrClient::new(endpoint));
    let tasks = controller.spawn_tasks(uploader);

    run(controller, tasks).await;
    Ok(())
}

/// Startup submission for the CLI-provided image.
async fn submit_startup_image(event_tx: &AsyncSender<AppEvent>, path: &Path) {
    match acquire::load_file(path).await {
        Ok(file) => {
            if let Err(e) = event_tx.send(AppEvent::FileChosen(file)).await {
                tracing::error!("failed to submit startup image: {e}");
            }
        }
        Err(e) => tracing::warn!("{e:#}"),
    }
}

async fn run(controller: AppController, mut tasks: JoinSet<anyhow::Result<()>>) {
    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
            Err(e) => tracing::error!("task aborted: {e}"),
        }
    }
}
