//! What the hook decided, and what came of it.

use http::{Response, StatusCode, header::LOCATION};

/// The decision for a failed page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Answer with a 401 redirect and stop processing the request.
    Redirect(Redirect),
    /// Let the host render its regular not-found page.
    Delegate(NotFoundDelegation),
}

impl Action {
    /// Whether the action ends request processing.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Redirect(_))
    }
}

/// A redirect to a login or access-denied target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Value of the `Location` header.
    pub location: String,
    /// Whether `redirect_url` was appended to the target.
    pub with_redirect_param: bool,
}

impl Redirect {
    /// Status sent with every redirect.
    pub const STATUS: StatusCode = StatusCode::UNAUTHORIZED;

    /// Build the wire response: `401` with a `Location` header and no body.
    pub fn to_response(&self) -> Result<Response<()>, http::Error> {
        Response::builder()
            .status(Self::STATUS)
            .header(LOCATION, self.location.as_str())
            .body(())
    }
}

/// Arguments for the host's not-found renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundDelegation {
    /// Configured `pageNotFound_handling` strategy for the host.
    pub strategy: String,
    /// Status header line from the global settings.
    pub status_header: String,
    /// Human-readable reason for the failure.
    pub reason_text: String,
}

/// Result of running the hook against a request.
#[derive(Debug)]
pub enum Outcome {
    /// The request must be answered with this response; nothing else renders.
    Redirected(Response<()>),
    /// The host's not-found renderer has taken over the response.
    Delegated,
}

impl Outcome {
    /// The redirect response, if one was produced.
    pub fn response(&self) -> Option<&Response<()>> {
        match self {
            Outcome::Redirected(response) => Some(response),
            Outcome::Delegated => None,
        }
    }
}
