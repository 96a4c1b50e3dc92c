/// Closed set of request language codes with exactly one active marker.
///
/// The registered set comes from configuration; the registry never activates
/// a code outside it.
pub struct LanguageRegistry {
    registered: Vec<String>,
    active: String,
}

/// Outcome of a switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSwitch {
    /// The code was already active.
    Unchanged,
    /// The code is now the active one.
    Switched,
    /// The code is not in the registered set; nothing changed.
    Unregistered,
}

impl LanguageRegistry {
    /// Build a registry with `default` active. If configuration left the
    /// default out of the registered set it is re-added, since the active
    /// code must always be a registered one.
    pub fn new(mut registered: Vec<String>, default: &str) -> Self {
        if !registered.iter().any(|code| code == default) {
            tracing::warn!(
                code = default,
                "default language missing from registered set, adding it"
            );
            registered.insert(0, default.to_string());
        }

        Self {
            registered,
            active: default.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    pub fn is_registered(&self, code: &str) -> bool {
        self.registered.iter().any(|registered| registered == code)
    }

    pub fn switch(&mut self, code: &str) -> LanguageSwitch {
        if code == self.active {
            return LanguageSwitch::Unchanged;
        }
        if !self.is_registered(code) {
            return LanguageSwitch::Unregistered;
        }

        self.active = code.to_string();
        LanguageSwitch::Switched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(vec!["zh".to_string(), "en".to_string()], "zh")
    }

    #[test]
    fn test_starts_with_default_active() {
        let registry = registry();
        assert_eq!(registry.active(), "zh");
    }

    #[test]
    fn test_switch_to_registered_code() {
        let mut registry = registry();
        assert_eq!(registry.switch("en"), LanguageSwitch::Switched);
        assert_eq!(registry.active(), "en");
    }

    #[test]
    fn test_switch_to_active_code_is_a_no_op() {
        let mut registry = registry();
        assert_eq!(registry.switch("zh"), LanguageSwitch::Unchanged);
        assert_eq!(registry.active(), "zh");
    }

    #[test]
    fn test_unregistered_code_is_rejected() {
        let mut registry = registry();
        assert_eq!(registry.switch("fr"), LanguageSwitch::Unregistered);
        assert_eq!(registry.active(), "zh");
    }

    #[test]
    fn test_missing_default_is_re_added() {
        let registry = LanguageRegistry::new(vec!["en".to_string()], "zh");
        assert!(registry.is_registered("zh"));
        assert_eq!(registry.active(), "zh");
    }
}
