use textlens_types::{OcrResult, Segment, UploadError};

use crate::locale::Locale;

/// What the results panel shows for one successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub confidence: String,
}

/// Turn a validated result into display text plus a confidence summary.
pub fn render(result: &OcrResult, locale: Locale) -> Rendered {
    let text = if result.text.trim().is_empty() {
        locale.no_text_detected().to_string()
    } else {
        result.text.clone()
    };

    Rendered {
        text,
        confidence: confidence_label(result, locale),
    }
}

/// Confidence summary, in strict precedence order: a finite server aggregate,
/// then the mean over segments, then the placeholder.
pub fn confidence_label(result: &OcrResult, locale: Locale) -> String {
    if let Some(average) = result.average_confidence
        && average.is_finite()
    {
        return locale.avg_confidence(average);
    }

    if !result.segments.is_empty() {
        let mean = mean_confidence(&result.segments);
        if mean.is_finite() {
            return locale.avg_confidence(mean);
        }
    }

    locale.no_confidence_data().to_string()
}

fn mean_confidence(segments: &[Segment]) -> f64 {
    let sum: f64 = segments.iter().map(|segment| segment.confidence).sum();
    sum / segments.len() as f64
}

/// Unify a failed upload into the single string the output surface shows.
pub fn failure_message(error: &UploadError, locale: Locale) -> String {
    match error {
        UploadError::Transport(message) | UploadError::Server(message) => message.clone(),
        UploadError::OpaqueServer | UploadError::MalformedBody => {
            locale.unknown_error().to_string()
        }
    }
}
