use textlens_types::OcrResult;

/// Display lifecycle of the most recent submission.
///
/// Exactly one variant holds at a time. The next submission re-enters
/// `Loading` from any state; there is no explicit cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(OcrResult),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}
