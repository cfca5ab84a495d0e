//! Console configuration

use crate::error::ConsoleError;
use atrium_client::ListQuery;
use atrium_model::RecordId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    20
}

fn default_capability_cache_ttl_secs() -> u64 {
    300
}

/// Console settings, loadable from TOML
///
/// Every field has a default so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Backend base URL, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; there is exactly one attempt per request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Records per page on list screens
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// How long capability answers stay cached
    #[serde(default = "default_capability_cache_ttl_secs")]
    pub capability_cache_ttl_secs: u64,
    /// Society the session is scoped to; absent for global scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub society_id: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_page_size: default_page_size(),
            capability_cache_ttl_secs: default_capability_cache_ttl_secs(),
            society_id: None,
        }
    }
}

impl ConsoleConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConsoleError> {
        let config: Self =
            toml::from_str(toml).map_err(|err| ConsoleError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConsoleError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|err| ConsoleError::Config(err.to_string()))?;
        Self::from_toml_str(&raw)
    }

    /// Set the backend base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout in seconds
    #[must_use]
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the list page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Scope the session to a society
    #[must_use]
    pub fn with_society(mut self, society_id: impl Into<String>) -> Self {
        self.society_id = Some(society_id.into());
        self
    }

    /// Per-request timeout
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Capability cache TTL
    #[inline]
    #[must_use]
    pub fn capability_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.capability_cache_ttl_secs)
    }

    /// First-page list query with the configured page size and scope
    #[must_use]
    pub fn default_query(&self) -> ListQuery {
        let query = ListQuery::new(self.default_page_size);
        match &self.society_id {
            Some(society) => query.with_society(RecordId::new(society.clone())),
            None => query,
        }
    }

    fn validate(&self) -> Result<(), ConsoleError> {
        if self.base_url.trim().is_empty() {
            return Err(ConsoleError::Config("base_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConsoleError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.default_page_size == 0 {
            return Err(ConsoleError::Config(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
