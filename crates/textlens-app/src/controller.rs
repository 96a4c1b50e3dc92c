use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use textlens_client::Uploader;
use textlens_types::{AppEvent, UiUpdate};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::surface::surface_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<UiUpdate>, AsyncReceiver<UiUpdate>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // display updates come in bursts
            ui_to_app: kanal::bounded_async(64),  // host interactions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender the host uses to raise intents. `main` also submits the
    /// startup image through this.
    pub fn intent_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    pub fn spawn_tasks(&self, uploader: Arc<dyn Uploader>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            uploader,
            self.cancel_token.child_token(),
        ));

        // Console surface
        tasks.spawn(surface_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
            self.cancel_token.child_token(),
        ));

        // Stdin watcher
        tasks.spawn(watcher_io(
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        tracing::info!("shutting down");
        self.cancel_token.cancel();
    }
}
