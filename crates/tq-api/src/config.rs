//! API server configuration.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tq_nlp::{DEFAULT_IRRELEVANCE_THRESHOLD, PriceSchedule};

/// An optional HTTP-backed capability.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Whether the capability is used at all.
    #[serde(default)]
    pub enabled: bool,
    /// Endpoint the request body is POSTed to.
    #[serde(default)]
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl RemoteConfig {
    pub fn enabled_at(url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            url: url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Enabled with a usable URL.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.url.trim().is_empty()
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Classifier Irrelevant score at which a request is rejected.
    #[serde(default = "default_irrelevance_threshold")]
    pub irrelevance_threshold: f64,
    /// Zero-shot classifier endpoint.
    #[serde(default)]
    pub classifier: RemoteConfig,
    /// Noun-phrase extractor endpoint.
    #[serde(default)]
    pub topics: RemoteConfig,
    /// Refund percentage model endpoint.
    #[serde(default)]
    pub refund: RemoteConfig,
    #[serde(default)]
    pub pricing: PriceSchedule,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_irrelevance_threshold() -> f64 {
    DEFAULT_IRRELEVANCE_THRESHOLD
}

impl ApiConfig {
    /// Load from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// File from `TQ_CONFIG` if set, otherwise defaults; then env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("TQ_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `TQ_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(host) = lookup("TQ_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("TQ_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("TQ_PORT is not a port: {port}"))?;
        }
        for (key, remote) in [
            ("TQ_CLASSIFIER_URL", &mut self.classifier),
            ("TQ_TOPICS_URL", &mut self.topics),
            ("TQ_REFUND_URL", &mut self.refund),
        ] {
            if let Some(url) = lookup(key) {
                remote.url = url;
                remote.enabled = true;
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.irrelevance_threshold) {
            anyhow::bail!(
                "irrelevance_threshold must be within 0..=1, got {}",
                self.irrelevance_threshold
            );
        }
        self.pricing.validate()?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            irrelevance_threshold: default_irrelevance_threshold(),
            classifier: RemoteConfig::default(),
            topics: RemoteConfig::default(),
            refund: RemoteConfig::default(),
            pricing: PriceSchedule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.irrelevance_threshold, 0.65);
        assert!(!config.classifier.is_active());
        assert!(!config.topics.is_active());
        assert!(!config.refund.is_active());
        assert_eq!(config.pricing, PriceSchedule::default());
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
port = 9000
cors_origins = ["http://localhost:5173"]

[classifier]
enabled = true
url = "http://127.0.0.1:8500/classify"
timeout_secs = 10

[pricing]
per_page = 12.0
"#;
        let config: ApiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert!(config.classifier.is_active());
        assert_eq!(config.classifier.timeout_secs, 10);
        assert!(!config.topics.enabled);
        assert_eq!(config.topics.timeout_secs, 5);
        assert_eq!(config.pricing.per_page, 12.0);
        assert_eq!(config.pricing.base_fee, 15.0);
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TQ_HOST", "127.0.0.1"),
            ("TQ_PORT", "8080"),
            ("TQ_TOPICS_URL", "http://nlp:9000/phrases"),
        ]
        .into_iter()
        .collect();
        let mut config = ApiConfig::default();
        config
            .apply_env(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.topics.is_active());
        assert_eq!(config.topics.url, "http://nlp:9000/phrases");
        assert!(!config.classifier.is_active());
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut config = ApiConfig::default();
        let result = config.apply_env(|k| (k == "TQ_PORT").then(|| "eighty".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn enabled_without_url_is_inactive() {
        let remote = RemoteConfig {
            enabled: true,
            ..Default::default()
        };
        assert!(!remote.is_active());
    }

    #[test]
    fn validate_rejects_bad_threshold_and_prices() {
        let mut config = ApiConfig {
            irrelevance_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        config.irrelevance_threshold = 0.65;
        config.pricing.base_fee = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn from_file_reads_toml() {
        let path = std::env::temp_dir().join(format!("tq-api-config-{}.toml", std::process::id()));
        std::fs::write(&path, "port = 7001\nirrelevance_threshold = 0.8\n").unwrap();
        let config = ApiConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.port, 7001);
        assert_eq!(config.irrelevance_threshold, 0.8);
    }
}
