//! Request-scoped values read from the hosting application.

/// The three request values the redirect builder needs.
///
/// Implemented by the host adapter; `pagewarden-std` ships a static
/// implementation that can also be derived from an `http::Request`.
pub trait RequestEnvironment {
    /// Host of the current request, used as the configuration key.
    fn host(&self) -> &str;

    /// Base URL of the current site, including a trailing slash.
    fn site_url(&self) -> &str;

    /// Full URL of the current request.
    fn request_url(&self) -> &str;
}

impl<T: RequestEnvironment + ?Sized> RequestEnvironment for &T {
    fn host(&self) -> &str {
        (**self).host()
    }

    fn site_url(&self) -> &str {
        (**self).site_url()
    }

    fn request_url(&self) -> &str {
        (**self).request_url()
    }
}
