use serde_json::Value;
use textlens_types::{OcrResult, Segment};

/// Coerce a loosely-shaped response body into the typed result.
///
/// The network boundary is the last place partial data is tolerated: `text`
/// must be a string for the body to count as a result at all, `segments`
/// defaults to empty when absent or not an array, a segment's missing or
/// non-numeric confidence becomes 0, and `average_confidence` survives only
/// when numeric. Extra fields the backend echoes (filename, language,
/// per-segment bbox/text) are ignored.
pub fn coerce_result(body: &Value) -> Option<OcrResult> {
    let text = body.get("text")?.as_str()?.to_string();

    let segments = body
        .get("segments")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| Segment {
                    confidence: item.get("confidence").and_then(Value::as_f64).unwrap_or(0.0),
                })
                .collect()
        })
        .unwrap_or_default();

    let average_confidence = body.get("average_confidence").and_then(Value::as_f64);

    Some(OcrResult {
        text,
        segments,
        average_confidence,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_full_shape_coerces() {
        let body = json!({
            "text": "hello",
            "segments": [{ "confidence": 0.5 }, { "confidence": 0.7 }],
            "average_confidence": 0.6,
        });

        let result = coerce_result(&body).unwrap();
        assert_eq!(result.text, "hello");
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.segments[0].confidence, 0.5);
        assert_eq!(result.average_confidence, Some(0.6));
    }

    #[test]
    fn test_missing_segments_default_to_empty() {
        let body = json!({ "text": "hello" });
        let result = coerce_result(&body).unwrap();
        assert!(result.segments.is_empty());
        assert_eq!(result.average_confidence, None);
    }

    #[test]
    fn test_non_array_segments_default_to_empty() {
        let body = json!({ "text": "hello", "segments": "oops" });
        let result = coerce_result(&body).unwrap();
        assert!(result.segments.is_empty());
    }

    #[test]
    fn test_unusable_confidences_become_zero() {
        let body = json!({
            "text": "hello",
            "segments": [
                { "confidence": null },
                { "confidence": "0.9" },
                {},
                { "confidence": 0.4 },
            ],
        });

        let result = coerce_result(&body).unwrap();
        let confidences: Vec<f64> = result.segments.iter().map(|s| s.confidence).collect();
        assert_eq!(confidences, vec![0.0, 0.0, 0.0, 0.4]);
    }

    #[test]
    fn test_backend_extras_are_ignored() {
        let body = json!({
            "text": "hello",
            "segments": [{ "bbox": [[0, 0], [1, 1]], "text": "hello", "confidence": 0.8 }],
            "filename": "receipt.png",
            "language": "zh",
        });

        let result = coerce_result(&body).unwrap();
        assert_eq!(result.segments, vec![Segment { confidence: 0.8 }]);
    }

    #[test]
    fn test_missing_or_non_string_text_is_rejected() {
        assert!(coerce_result(&json!({ "segments": [] })).is_none());
        assert!(coerce_result(&json!({ "text": 42 })).is_none());
        assert!(coerce_result(&json!("just a string")).is_none());
        assert!(coerce_result(&json!(null)).is_none());
    }

    #[test]
    fn test_non_numeric_average_is_dropped() {
        let body = json!({ "text": "hello", "average_confidence": "high" });
        let result = coerce_result(&body).unwrap();
        assert_eq!(result.average_confidence, None);
    }
}
