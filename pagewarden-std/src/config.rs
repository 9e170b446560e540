//! TOML-backed configuration.
//!
//! A settings document carries the global not-found settings and one table
//! per host under `domains`:
//!
//! ```toml
//! [not_found]
//! status_header = "HTTP/1.0 404 Not Found"
//!
//! [domains._DEFAULT]
//! pageNotFound_handling = "READFILE:404.html"
//! pageNotAuthorized_Url = "/login"
//! pageNotAuthenticatedNotAuthorized_Url = "/no-access"
//! ```
//!
//! Host entries that are not valid records are kept, but resolve to an empty
//! record. They do not fall back to `_DEFAULT`.

use pagewarden_core::{ConfigError, ConfigProvider, DomainConfiguration, GlobalSettings};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

/// An in-memory [`ConfigProvider`].
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    domains: HashMap<String, DomainConfiguration>,
    malformed: Vec<String>,
}

impl StaticConfigProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the configuration for `host`.
    pub fn with_domain(mut self, host: impl Into<String>, config: DomainConfiguration) -> Self {
        self.insert(host, config);
        self
    }

    /// Add or replace the configuration for `host`.
    pub fn insert(&mut self, host: impl Into<String>, config: DomainConfiguration) {
        let host = host.into();
        self.malformed.retain(|h| h != &host);
        self.domains.insert(host, config);
    }

    /// Hosts whose entries could not be read and resolve to an empty record.
    pub fn malformed_hosts(&self) -> &[String] {
        &self.malformed
    }

    /// Number of configured hosts, `_DEFAULT` included.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether no host is configured.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    fn from_table(table: toml::Table) -> Self {
        let mut provider = Self::new();
        for (host, value) in table {
            let parsed = match value {
                entry @ toml::Value::Table(_) => entry
                    .try_into::<DomainConfiguration>()
                    .map_err(|e| e.to_string()),
                other => Err(format!("expected a table, found {}", other.type_str())),
            };
            match parsed {
                Ok(config) => provider.insert(host, config),
                Err(_reason) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        %host,
                        reason = %_reason,
                        "malformed domain configuration, using empty record"
                    );
                    provider.insert_malformed(host);
                }
            }
        }
        provider
    }

    fn insert_malformed(&mut self, host: String) {
        self.domains.insert(host.clone(), DomainConfiguration::default());
        self.malformed.push(host);
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn lookup(&self, host: &str) -> Option<DomainConfiguration> {
        self.domains.get(host).cloned()
    }
}

/// A complete settings document.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Host-wide not-found settings.
    pub not_found: GlobalSettings,
    /// Per-host configuration.
    pub domains: StaticConfigProvider,
}

#[derive(Deserialize)]
struct RawSettings {
    #[serde(default)]
    not_found: GlobalSettings,
    #[serde(default)]
    domains: toml::Table,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawSettings = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Ok(Self {
            not_found: raw.not_found,
            domains: StaticConfigProvider::from_table(raw.domains),
        })
    }
}
