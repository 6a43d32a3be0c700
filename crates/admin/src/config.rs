//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the Tera templates directory (default: ./templates).
    pub templates_dir: PathBuf,

    /// Base URL for static assets (default: /static).
    pub static_url: String,

    /// Language used when the acting user has none set (default: en).
    pub default_language: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every key has a default, so this never fails.
    pub fn from_env() -> Self {
        let templates_dir = env::var("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./templates"));

        let static_url = env::var("STATIC_URL").unwrap_or_else(|_| "/static".to_string());

        let default_language = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        Self {
            templates_dir,
            static_url,
            default_language,
        }
    }

    /// Build the URL for a static asset.
    pub fn static_asset(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.static_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("./templates"),
            static_url: "/static".to_string(),
            default_language: "en".to_string(),
        }
    }
}
