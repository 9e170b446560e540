//! Per-host configuration and the provider seam it is read through.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Key consulted when the current host has no entry of its own.
pub const DEFAULT_DOMAIN_KEY: &str = "_DEFAULT";

/// Status header the host sends with its not-found page unless configured.
pub const DEFAULT_STATUS_HEADER: &str = "HTTP/1.0 404 Not Found";

/// Redirect targets and not-found handling for one host.
///
/// Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfiguration {
    /// Strategy handed to the host's not-found renderer.
    #[serde(rename = "pageNotFound_handling")]
    pub page_not_found_handling: String,

    /// Target for anonymous visitors hitting a group-gated page.
    #[serde(rename = "pageNotAuthorized_Url")]
    pub page_not_authorized_url: String,

    /// Target for logged-in users lacking the required group.
    #[serde(rename = "pageNotAuthenticatedNotAuthorized_Url")]
    pub page_not_authenticated_not_authorized_url: String,
}

impl DomainConfiguration {
    /// The redirect target for the requested case.
    pub fn redirect_target(&self, add_redirect_param: bool) -> &str {
        if add_redirect_param {
            &self.page_not_authorized_url
        } else {
            &self.page_not_authenticated_not_authorized_url
        }
    }
}

/// Host-wide not-found settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Status header line passed to the not-found renderer. Empty disables it.
    #[serde(alias = "pageNotFound_handling_statheader")]
    pub status_header: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            status_header: DEFAULT_STATUS_HEADER.to_owned(),
        }
    }
}

/// Read-only source of [`DomainConfiguration`] keyed by host.
///
/// `lookup` answers for the exact key only; the `_DEFAULT` fallback is
/// applied by [`resolve_domain`].
pub trait ConfigProvider: Send + Sync {
    /// The configuration stored under `host`, if any.
    fn lookup(&self, host: &str) -> Option<DomainConfiguration>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn lookup(&self, host: &str) -> Option<DomainConfiguration> {
        (**self).lookup(host)
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Box<P> {
    fn lookup(&self, host: &str) -> Option<DomainConfiguration> {
        (**self).lookup(host)
    }
}

/// Resolve the configuration for `host`.
///
/// Tries `host`, then [`DEFAULT_DOMAIN_KEY`], then yields an empty record.
pub fn resolve_domain<P: ConfigProvider + ?Sized>(provider: &P, host: &str) -> DomainConfiguration {
    provider
        .lookup(host)
        .or_else(|| provider.lookup(DEFAULT_DOMAIN_KEY))
        .unwrap_or_default()
}
