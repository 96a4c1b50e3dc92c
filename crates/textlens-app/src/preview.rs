use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use textlens_types::{PreviewSource, SelectedFile};

static NEXT_PREVIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Owning side of one preview slot.
///
/// The session holds at most one of these; storing a replacement drops the
/// predecessor, which is the release point for its bytes. The surface only
/// ever sees cloned [`PreviewSource`] views.
pub struct PreviewHandle {
    source: PreviewSource,
}

impl PreviewHandle {
    pub fn new(file: &SelectedFile) -> Self {
        let source = PreviewSource {
            id: NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed),
            mime: file.mime.clone(),
            bytes: Arc::from(file.bytes.as_slice()),
        };
        tracing::trace!(id = source.id, bytes = source.bytes.len(), "preview acquired");
        Self { source }
    }

    pub fn id(&self) -> u64 {
        self.source.id
    }

    /// Cloned view for the surface's preview slot.
    pub fn source(&self) -> PreviewSource {
        self.source.clone()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        tracing::trace!(id = self.source.id, "preview released");
    }
}
