use std::path::Path;

use anyhow::Context;
use textlens_types::SelectedFile;

/// Split one stdin line into the list of offered paths.
///
/// Terminals deliver a drop as pasted text: whitespace-separated paths, with
/// quoting or backslash escapes around the ones that contain spaces.
pub fn split_offered(line: &str) -> Vec<String> {
    let mut offered = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            // Outside quotes a backslash escapes the next character, the
            // paste form some terminals use for spaces.
            None if ch == '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            None if ch == '\'' || ch == '"' => quote = Some(ch),
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    offered.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }
    if !current.is_empty() {
        offered.push(current);
    }

    offered
}

/// First offered path wins; the rest are dropped. Zero offers is a no-op.
pub fn first_offered(offered: &[String]) -> Option<&str> {
    if offered.len() > 1 {
        tracing::debug!(
            discarded = offered.len() - 1,
            "multiple files offered, keeping the first"
        );
    }
    offered.first().map(String::as_str)
}

/// MIME hint from the file extension; the backend treats it as advisory.
pub fn mime_hint(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Read one chosen file into the normalized form the controller consumes.
pub async fn load_file(path: &Path) -> anyhow::Result<SelectedFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(SelectedFile {
        name,
        mime: mime_hint(path).to_string(),
        bytes,
    })
}
