//! Client configuration
//!
//! Loaded from a YAML file (every field optional) and then overridden by
//! command-line flags. `validate` enforces the bounds the order API accepts.

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Largest page the order API serves; larger limits are clamped server side
pub const MAX_PAGE_SIZE: u32 = 100;

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the order API
    pub base_url: String,

    /// Items per page, fixed for the lifetime of a session
    pub page_size: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Transport retries per request (0 = no automatic retry)
    pub max_retries: u32,

    /// How long an error banner stays visible, in seconds
    pub error_display_secs: u64,

    /// User agent override
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
            max_retries: 0,
            error_display_secs: 5,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Check value bounds
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("base_url", "must not be empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        Ok(())
    }

    /// Error banner lifetime
    pub fn error_display(&self) -> Duration {
        Duration::from_secs(self.error_display_secs)
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries);

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }
}
