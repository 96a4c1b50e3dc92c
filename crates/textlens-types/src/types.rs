use std::fmt;
use std::sync::Arc;

use crate::error::UploadError;

/// An image the host picked for upload.
///
/// Held only long enough to derive a preview and build the outgoing request;
/// the controller does not keep it after submission.
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    /// Best-effort MIME hint for the multipart part.
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// One detected text region with the backend's certainty in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub confidence: f64,
}

/// Validated OCR response, coerced into a fully-typed shape before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrResult {
    pub text: String,
    pub segments: Vec<Segment>,
    /// Server-side aggregate; preferred over a client-computed mean when present.
    pub average_confidence: Option<f64>,
}

/// Events delivered to the controller's dispatch loop.
///
/// `FileChosen`, `LanguageChanged` and `InputClosed` are raised by the host;
/// `UploadResolved` is re-injected by the upload task when a request
/// finishes.
#[derive(Debug, Clone)]
pub enum AppEvent {
    FileChosen(SelectedFile),
    LanguageChanged(String),
    /// The host raises no further intents; pending work may still resolve.
    InputClosed,
    UploadResolved {
        generation: u64,
        outcome: Result<OcrResult, UploadError>,
    },
}

/// Cloneable view of the bytes backing a preview slot.
///
/// The controller keeps the owning handle; the surface keeps one of these.
/// When both let go the bytes are freed.
#[derive(Clone)]
pub struct PreviewSource {
    pub id: u64,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for PreviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSource")
            .field("id", &self.id)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Display instructions emitted by the controller for the host surface.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Busy indicator plus the localized status label next to it.
    Status { busy: bool, label: String },
    /// Replace the contents of the preview image slot.
    Preview(PreviewSource),
    /// Empty the results panel (text and confidence).
    Clear,
    /// Rendered success outcome.
    Result { text: String, confidence: String },
    /// Unified failure message for the output surface.
    Error { message: String },
    /// Mark this code as the active language toggle.
    Language(String),
}
