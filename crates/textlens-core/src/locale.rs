/// UI language family for fixed display strings.
///
/// Derived from the active request language: anything in the `zh` family gets
/// the Chinese strings, everything else falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    pub fn for_language(code: &str) -> Self {
        match code.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("zh") => Locale::Zh,
            _ => Locale::En,
        }
    }

    /// Status label shown while a request is in flight.
    pub fn processing(&self) -> &'static str {
        match self {
            Locale::Zh => "处理中...",
            Locale::En => "Processing...",
        }
    }

    /// Generic fallback when the server gave no usable message.
    pub fn unknown_error(&self) -> &'static str {
        match self {
            Locale::Zh => "未知错误",
            Locale::En => "Unknown error",
        }
    }

    /// Placeholder when the recognized text is empty.
    pub fn no_text_detected(&self) -> &'static str {
        match self {
            Locale::Zh => "未检测到文字",
            Locale::En => "No text detected.",
        }
    }

    /// Placeholder when neither aggregate nor segments yield a confidence.
    pub fn no_confidence_data(&self) -> &'static str {
        match self {
            Locale::Zh => "暂无置信度数据",
            Locale::En => "No confidence data",
        }
    }

    /// Percentage label, one decimal place: `Avg confidence 82.3%`.
    pub fn avg_confidence(&self, value: f64) -> String {
        let prefix = match self {
            Locale::Zh => "平均置信度",
            Locale::En => "Avg confidence",
        };
        format!("{} {:.1}%", prefix, value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zh_family_maps_to_chinese() {
        assert_eq!(Locale::for_language("zh"), Locale::Zh);
        assert_eq!(Locale::for_language("zh-Hant"), Locale::Zh);
        assert_eq!(Locale::for_language("ZH"), Locale::Zh);
    }

    #[test]
    fn test_everything_else_falls_back_to_english() {
        assert_eq!(Locale::for_language("en"), Locale::En);
        assert_eq!(Locale::for_language("ja"), Locale::En);
        assert_eq!(Locale::for_language(""), Locale::En);
        // multibyte first char must not panic the prefix check
        assert_eq!(Locale::for_language("中文"), Locale::En);
    }

    #[test]
    fn test_percentage_formats_to_one_decimal() {
        assert_eq!(Locale::En.avg_confidence(0.823), "Avg confidence 82.3%");
        assert_eq!(Locale::Zh.avg_confidence(0.6), "平均置信度 60.0%");
    }
}
