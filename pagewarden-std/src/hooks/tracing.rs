//! Tracing wrapper for not-found hooks.

use pagewarden_core::{
    Action, NotFoundRenderer, Outcome, PageAccessFailure, PageNotFoundHook, RequestEnvironment,
    WardenError,
};

/// A hook wrapper that instruments execution with a `tracing` span.
///
/// The span records the hook name, the request host and URL. Renderer and
/// response errors are logged at `error` before being returned. Without the
/// `tracing` feature the wrapper is a plain pass-through.
pub struct TracingHook<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHook<H> {
    /// Create a new `TracingHook` wrapper around a hook.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped hook.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Name recorded on the span.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<H: Clone> Clone for TracingHook<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: PageNotFoundHook> PageNotFoundHook for TracingHook<H> {
    #[cfg(feature = "tracing")]
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action {
        let span = tracing::info_span!(
            "page_not_found",
            hook = %self.name,
            host = %env.host(),
            request_url = %env.request_url(),
        );
        let _guard = span.enter();
        let action = self.inner.decide(failure, env);
        tracing::debug!(?action, "decided");
        action
    }

    #[cfg(not(feature = "tracing"))]
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action {
        self.inner.decide(failure, env)
    }

    #[cfg(feature = "tracing")]
    fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        let span = tracing::info_span!(
            "page_not_found",
            hook = %self.name,
            host = %env.host(),
            request_url = %env.request_url(),
        );
        let _guard = span.enter();
        match self.inner.handle(failure, env, renderer) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Redirected(response) => tracing::info!(
                        status = %response.status(),
                        location = ?response.headers().get(http::header::LOCATION),
                        "redirecting"
                    ),
                    Outcome::Delegated => tracing::info!("delegated to not-found renderer"),
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "not-found hook failed");
                Err(err)
            }
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        self.inner.handle(failure, env, renderer)
    }
}
