use textlens_config::Config;
use textlens_core::language::{LanguageRegistry, LanguageSwitch};
use textlens_core::locale::Locale;
use textlens_core::state::UiState;

use crate::preview::PreviewHandle;

/// Mutable state owned by the event loop.
///
/// The loop is the single thread of control, so nothing here needs locking.
/// Upload tasks report back exclusively through `UploadResolved` events, each
/// stamped with the generation it was issued under.
pub struct Session {
    languages: LanguageRegistry,
    ui_state: UiState,
    issued_generation: u64,
    preview: Option<PreviewHandle>,
    input_closed: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            languages: LanguageRegistry::new(
                config.language.registered.clone(),
                &config.language.default,
            ),
            ui_state: UiState::Idle,
            issued_generation: 0,
            preview: None,
            input_closed: false,
        }
    }

    pub fn active_language(&self) -> &str {
        self.languages.active()
    }

    pub fn registered_languages(&self) -> &[String] {
        self.languages.registered()
    }

    pub fn locale(&self) -> Locale {
        Locale::for_language(self.languages.active())
    }

    pub fn switch_language(&mut self, code: &str) -> LanguageSwitch {
        self.languages.switch(code)
    }

    /// Open a new submission: bump the generation, swap the preview in and
    /// enter Loading. Returns the generation the upload task must echo back.
    pub fn begin_submission(&mut self, preview: PreviewHandle) -> u64 {
        self.issued_generation += 1;
        if let Some(old) = self.preview.replace(preview) {
            tracing::debug!(id = old.id(), "replacing preview");
        }
        self.ui_state = UiState::Loading;
        self.issued_generation
    }

    /// Whether a completion belongs to the most recent submission.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.issued_generation
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn set_ui_state(&mut self, state: UiState) {
        self.ui_state = state;
    }

    /// Language switches clear a displayed outcome but leave Loading alone;
    /// the pending request's own resolution will settle the display.
    pub fn clear_displayed_result(&mut self) {
        if matches!(self.ui_state, UiState::Success(_) | UiState::Error(_)) {
            self.ui_state = UiState::Idle;
        }
    }

    /// The host will raise no further intents.
    pub fn close_input(&mut self) {
        self.input_closed = true;
    }

    /// The loop stops once input has closed and no upload is pending, so a
    /// submission that was already in flight still gets rendered.
    pub fn should_stop(&self) -> bool {
        self.input_closed && !self.ui_state.is_loading()
    }
}
