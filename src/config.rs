//! Runtime configuration read from the environment (and a `.env` file).

use std::path::PathBuf;
use std::time::Duration;

use crate::io::http_client::PROBE_TIMEOUT;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
    /// Fetch the audited page and include what was observed in the prompt.
    pub page_probe: bool,
    /// Bound on the page fetch, independent of `timeout`.
    pub probe_timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            timeout: None,
            page_probe: true,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub storage_path: Option<PathBuf>,
    pub export_dir: PathBuf,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = var("GEMINI_API_KEY").or_else(|| var("API_KEY"));
        let timeout = var("SEO_MASTER_GATEWAY_TIMEOUT_SECS").and_then(|raw| match raw.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                tracing::warn!("Ignoring invalid SEO_MASTER_GATEWAY_TIMEOUT_SECS={}", raw);
                None
            }
        });
        let page_probe = var("SEO_MASTER_PAGE_PROBE")
            .map(|raw| !matches!(raw.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        let gemini = GeminiConfig {
            api_key,
            model: var("SEO_MASTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("SEO_MASTER_GEMINI_URL").unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string()),
            timeout,
            page_probe,
            probe_timeout: PROBE_TIMEOUT,
        };

        let storage_path = var("SEO_MASTER_STORAGE")
            .map(PathBuf::from)
            .or_else(|| dirs::data_local_dir().map(|d| d.join("seo-master").join("storage.json")));
        let export_dir = var("SEO_MASTER_EXPORT_DIR")
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            gemini,
            storage_path,
            export_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.gemini.api_key, None);
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_GEMINI_URL);
        assert_eq!(config.gemini.timeout, None);
        assert!(config.gemini.page_probe);
        assert_eq!(config.gemini.probe_timeout, PROBE_TIMEOUT);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "fallback"),
            ("SEO_MASTER_MODEL", "gemini-2.0-flash"),
            ("SEO_MASTER_GATEWAY_TIMEOUT_SECS", "45"),
            ("SEO_MASTER_PAGE_PROBE", "off"),
            ("SEO_MASTER_STORAGE", "/tmp/usage.json"),
            ("SEO_MASTER_EXPORT_DIR", "/tmp/reports"),
        ]));
        assert_eq!(config.gemini.api_key.as_deref(), Some("fallback"));
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.timeout, Some(Duration::from_secs(45)));
        assert!(!config.gemini.page_probe);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/usage.json")));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn primary_key_wins_and_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "fallback"),
            ("SEO_MASTER_MODEL", "   "),
            ("SEO_MASTER_GATEWAY_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.gemini.api_key.as_deref(), Some("primary"));
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.timeout, None);
    }
}
