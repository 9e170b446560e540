//! Request environments.

use http::{Request, header::HOST};
use pagewarden_core::RequestEnvironment;

/// A [`RequestEnvironment`] holding plain values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    host: String,
    site_url: String,
    request_url: String,
}

impl StaticEnvironment {
    /// Create an environment from explicit values.
    pub fn new(
        host: impl Into<String>,
        site_url: impl Into<String>,
        request_url: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            site_url: site_url.into(),
            request_url: request_url.into(),
        }
    }

    /// Derive the environment from an incoming request.
    ///
    /// The host comes from the `Host` header, falling back to the URI
    /// authority. The scheme defaults to `http` when the URI has none.
    /// `site_path` is the path the site is mounted under; it is normalized to
    /// start and end with `/`.
    pub fn from_request<B>(request: &Request<B>, site_path: &str) -> Self {
        let uri = request.uri();
        let host = request
            .headers()
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| uri.authority().map(|authority| authority.as_str()))
            .unwrap_or_default()
            .to_owned();
        let scheme = uri.scheme_str().unwrap_or("http");
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let trimmed = site_path.trim_matches('/');
        let site_path = if trimmed.is_empty() {
            "/".to_owned()
        } else {
            format!("/{trimmed}/")
        };

        Self {
            site_url: format!("{scheme}://{host}{site_path}"),
            request_url: format!("{scheme}://{host}{path_and_query}"),
            host,
        }
    }
}

impl RequestEnvironment for StaticEnvironment {
    fn host(&self) -> &str {
        &self.host
    }

    fn site_url(&self) -> &str {
        &self.site_url
    }

    fn request_url(&self) -> &str {
        &self.request_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_uses_host_header() {
        let request = Request::builder()
            .uri("/members/area?tab=2")
            .header(HOST, "example.org")
            .body(())
            .unwrap();
        let env = StaticEnvironment::from_request(&request, "/");
        assert_eq!(env.host(), "example.org");
        assert_eq!(env.site_url(), "http://example.org/");
        assert_eq!(env.request_url(), "http://example.org/members/area?tab=2");
    }

    #[test]
    fn test_from_request_uses_absolute_uri() {
        let request = Request::builder()
            .uri("https://example.org:8443/secret")
            .body(())
            .unwrap();
        let env = StaticEnvironment::from_request(&request, "portal");
        assert_eq!(env.host(), "example.org:8443");
        assert_eq!(env.site_url(), "https://example.org:8443/portal/");
        assert_eq!(env.request_url(), "https://example.org:8443/secret");
    }

    #[test]
    fn test_site_path_is_normalized() {
        let request = Request::builder()
            .uri("/")
            .header(HOST, "example.org")
            .body(())
            .unwrap();
        let env = StaticEnvironment::from_request(&request, "/cms/site/");
        assert_eq!(env.site_url(), "http://example.org/cms/site/");
    }
}
