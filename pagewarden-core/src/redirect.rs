//! Redirect target construction.

use crate::{config::DomainConfiguration, environment::RequestEnvironment};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query parameter carrying the URL to return to after login.
pub const REDIRECT_PARAM: &str = "redirect_url";

/// RFC 3986 unreserved characters stay literal, everything else is encoded.
const RAW_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `value` for use as a query parameter value.
pub fn raw_url_encode(value: &str) -> String {
    utf8_percent_encode(value, RAW_URL).to_string()
}

/// Build the fully qualified redirect target for a not-authorized request.
///
/// `add_redirect_param` selects `pageNotAuthorized_Url` and appends
/// `redirect_url=<current request URL>`; otherwise
/// `pageNotAuthenticatedNotAuthorized_Url` is used as is. Site-relative
/// targets (leading `/`) are prefixed with the site base URL.
///
/// An empty configuration yields an empty (or parameter-only) target.
pub fn build_redirect_url<E>(
    config: &DomainConfiguration,
    env: &E,
    add_redirect_param: bool,
) -> String
where
    E: RequestEnvironment + ?Sized,
{
    let target = config.redirect_target(add_redirect_param);

    let mut url = match target.strip_prefix('/') {
        Some(relative) => format!("{}{}", env.site_url(), relative),
        None => target.to_owned(),
    };

    if add_redirect_param {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(REDIRECT_PARAM);
        url.push('=');
        url.push_str(&raw_url_encode(env.request_url()));
    }

    url
}
