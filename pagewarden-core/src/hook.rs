//! # The Not-Found Hook
//!
//! The entry point a host calls when a page request fails. The host passes
//! the failure record together with two request-scoped capabilities: the
//! [`RequestEnvironment`] for URL values and the [`NotFoundRenderer`] for its
//! regular not-found page.
//!
//! Implementors supply [`decide`]; [`handle`] applies the decision. Wrappers
//! (logging, tracing) forward both.
//!
//! [`decide`]: PageNotFoundHook::decide
//! [`handle`]: PageNotFoundHook::handle

use crate::{
    action::{Action, Outcome},
    environment::RequestEnvironment,
    error::WardenError,
    reason::PageAccessFailure,
    renderer::NotFoundRenderer,
};
use std::sync::Arc;

/// A hook run by the host for every failed page request.
///
/// The trait is object safe; hosts may hold a `Box<dyn PageNotFoundHook>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `PageNotFoundHook`",
    label = "missing `PageNotFoundHook` implementation",
    note = "Hooks must implement `decide` for `PageAccessFailure`."
)]
pub trait PageNotFoundHook: Send + Sync {
    /// Decide how to answer the failed request. Never fails.
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action;

    /// Decide and apply.
    ///
    /// A redirect yields [`Outcome::Redirected`] with the response the host
    /// must send before ending the request. A delegation calls `renderer`
    /// and yields [`Outcome::Delegated`].
    fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        match self.decide(failure, env) {
            Action::Redirect(redirect) => Ok(Outcome::Redirected(redirect.to_response()?)),
            Action::Delegate(delegation) => {
                renderer
                    .render(
                        &delegation.strategy,
                        &delegation.status_header,
                        &delegation.reason_text,
                    )
                    .map_err(WardenError::Render)?;
                Ok(Outcome::Delegated)
            }
        }
    }
}

impl<H: PageNotFoundHook + ?Sized> PageNotFoundHook for Box<H> {
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action {
        (**self).decide(failure, env)
    }

    fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        (**self).handle(failure, env, renderer)
    }
}

impl<H: PageNotFoundHook + ?Sized> PageNotFoundHook for Arc<H> {
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action {
        (**self).decide(failure, env)
    }

    fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        (**self).handle(failure, env, renderer)
    }
}
