//! Locale service for interface string translation.
//!
//! Holds an in-memory catalog plus the gender-pair table used to pick the
//! grammatical form of status labels.

use anyhow::{Context, Result};
use dashmap::DashMap;
use tracing::info;

/// Grammatical gender of a translated status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Parse the one-letter wire code: `"m"` is masculine, anything else is
    /// feminine.
    pub fn from_code(code: &str) -> Self {
        if code == "m" {
            Gender::Masculine
        } else {
            Gender::Feminine
        }
    }
}

/// Locale translation service.
pub struct LocaleService {
    /// Translation catalog: key = "language\0source" -> translation.
    catalog: DashMap<String, String>,
    /// Status label -> (masculine key, feminine key).
    gender_pairs: DashMap<String, (String, String)>,
}

impl LocaleService {
    /// Create a locale service with the built-in gender pairs.
    pub fn new() -> Self {
        let service = Self {
            catalog: DashMap::new(),
            gender_pairs: DashMap::new(),
        };
        service.register_gender_pair("Enabled", "enabled_m", "enabled_f");
        service.register_gender_pair("Disabled", "disabled_m", "disabled_f");
        service
    }

    /// Register a single translation.
    pub fn add_translation(&self, language: &str, source: &str, translation: impl Into<String>) {
        self.catalog.insert(cache_key(language, source), translation.into());
    }

    /// Import translations for a language from a JSON object of
    /// source -> translation pairs.
    pub fn import_json(&self, language: &str, json: &str) -> Result<usize> {
        let entries: std::collections::HashMap<String, String> =
            serde_json::from_str(json).context("failed to parse translation catalog")?;

        let count = entries.len();
        for (source, translation) in entries {
            self.catalog.insert(cache_key(language, &source), translation);
        }

        info!(language = %language, count = count, "imported translations");
        Ok(count)
    }

    /// Translate a source string.
    ///
    /// Falls back to the source string if no translation is found.
    pub fn translate(&self, source: &str, language: &str) -> String {
        self.catalog
            .get(&cache_key(language, source))
            .map(|translation| translation.clone())
            .unwrap_or_else(|| source.to_string())
    }

    /// Register a masculine/feminine key pair for a status label.
    pub fn register_gender_pair(&self, value: &str, masculine: &str, feminine: &str) {
        self.gender_pairs
            .insert(value.to_string(), (masculine.to_string(), feminine.to_string()));
    }

    /// Translate a status label into the requested gender form.
    ///
    /// An unresolved translation still carries the `'_'` key separator; in
    /// that case the input value is returned unchanged.
    pub fn gender(&self, value: &str, gender: Gender, language: &str) -> String {
        if let Some(pair) = self.gender_pairs.get(value) {
            let key = match gender {
                Gender::Masculine => &pair.0,
                Gender::Feminine => &pair.1,
            };
            let translated = self.translate(key, language);
            if !translated.contains('_') {
                return translated;
            }
        }
        value.to_string()
    }

    /// Clear the translation catalog.
    pub fn clear(&self) {
        self.catalog.clear();
    }
}

impl Default for LocaleService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("catalog_size", &self.catalog.len())
            .field("gender_pairs", &self.gender_pairs.len())
            .finish()
    }
}

/// Build a catalog key from language and source.
///
/// Uses a null byte separator to prevent collisions when source strings
/// contain the separator characters themselves.
fn cache_key(language: &str, source: &str) -> String {
    format!("{language}\0{source}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn translate_returns_source_when_no_translation() {
        let locale = LocaleService::new();
        assert_eq!(locale.translate("Domains", "en"), "Domains");
    }

    #[test]
    fn translate_returns_catalog_entry() {
        let locale = LocaleService::new();
        locale.add_translation("fr", "Domains", "Domaines");
        assert_eq!(locale.translate("Domains", "fr"), "Domaines");
        assert_eq!(locale.translate("Domains", "de"), "Domains");
    }

    #[test]
    fn import_json_populates_catalog() {
        let locale = LocaleService::new();
        let count = locale
            .import_json("fr", r#"{"Domains": "Domaines", "Identities": "Identités"}"#)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(locale.translate("Identities", "fr"), "Identités");
    }

    #[test]
    fn import_json_rejects_malformed_catalog() {
        let locale = LocaleService::new();
        assert!(locale.import_json("fr", "[1, 2, 3]").is_err());
    }

    #[test]
    fn gender_resolves_requested_form() {
        let locale = LocaleService::new();
        locale.add_translation("fr", "enabled_m", "activé");
        locale.add_translation("fr", "enabled_f", "activée");

        assert_eq!(locale.gender("Enabled", Gender::Masculine, "fr"), "activé");
        assert_eq!(locale.gender("Enabled", Gender::Feminine, "fr"), "activée");
    }

    #[test]
    fn gender_falls_back_when_unresolved() {
        let locale = LocaleService::new();
        // No catalog entry: translate() returns the key, which still
        // contains the '_' sentinel.
        assert_eq!(locale.gender("Enabled", Gender::Feminine, "fr"), "Enabled");
    }

    #[test]
    fn gender_falls_back_for_unregistered_value() {
        let locale = LocaleService::new();
        assert_eq!(locale.gender("Pending", Gender::Masculine, "en"), "Pending");
    }

    #[test]
    fn gender_code_parsing() {
        assert_eq!(Gender::from_code("m"), Gender::Masculine);
        assert_eq!(Gender::from_code("f"), Gender::Feminine);
        assert_eq!(Gender::from_code("x"), Gender::Feminine);
    }
}
