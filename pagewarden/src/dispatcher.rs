//! The not-found dispatcher.

use pagewarden_core::{
    Action, ConfigProvider, DomainConfiguration, GlobalSettings, NotFoundDelegation,
    NotFoundRenderer, Outcome, PageAccessFailure, PageNotFoundHook, Redirect, RequestEnvironment,
    WardenError, build_redirect_url, resolve_domain,
};
use pagewarden_std::config::{Settings, StaticConfigProvider};

/// Decides between a 401 redirect and the host's not-found page.
///
/// Branches are checked in order:
///
/// 1. authenticated but not authorized: redirect to
///    `pageNotAuthenticatedNotAuthorized_Url`, no `redirect_url`
/// 2. unauthorized: redirect to `pageNotAuthorized_Url` with `redirect_url`
/// 3. otherwise: delegate to the host renderer
///
/// A host without configuration (and no `_DEFAULT`) gets an empty record.
/// The resulting redirect target may then be empty; it is sent as is.
pub struct NotFoundDispatcher<P> {
    provider: P,
    settings: GlobalSettings,
}

impl<P: ConfigProvider> NotFoundDispatcher<P> {
    /// Create a dispatcher reading domain configuration from `provider`.
    pub fn new(provider: P, settings: GlobalSettings) -> Self {
        Self { provider, settings }
    }

    /// The global settings in use.
    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    /// The configuration provider in use.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Configuration for the host of the current request.
    pub fn domain_configuration<E>(&self, env: &E) -> DomainConfiguration
    where
        E: RequestEnvironment + ?Sized,
    {
        resolve_domain(&self.provider, env.host())
    }

    /// The redirect target for the current request.
    pub fn redirect_url<E>(&self, env: &E, add_redirect_param: bool) -> String
    where
        E: RequestEnvironment + ?Sized,
    {
        build_redirect_url(&self.domain_configuration(env), env, add_redirect_param)
    }

    fn redirect<E>(&self, env: &E, add_redirect_param: bool) -> Action
    where
        E: RequestEnvironment + ?Sized,
    {
        let config = self.domain_configuration(env);
        if config.redirect_target(add_redirect_param).is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                host = %env.host(),
                add_redirect_param,
                "no redirect target configured, sending empty target"
            );
        }

        Action::Redirect(Redirect {
            location: build_redirect_url(&config, env, add_redirect_param),
            with_redirect_param: add_redirect_param,
        })
    }

    /// Decide and apply; see [`PageNotFoundHook::handle`].
    pub fn handle(
        &self,
        failure: &PageAccessFailure,
        env: &dyn RequestEnvironment,
        renderer: &dyn NotFoundRenderer,
    ) -> Result<Outcome, WardenError> {
        PageNotFoundHook::handle(self, failure, env, renderer)
    }
}

impl NotFoundDispatcher<StaticConfigProvider> {
    /// Create a dispatcher from a loaded settings document.
    pub fn from_settings(settings: Settings) -> Self {
        Self::new(settings.domains, settings.not_found)
    }
}

impl<P: ConfigProvider> PageNotFoundHook for NotFoundDispatcher<P> {
    fn decide(&self, failure: &PageAccessFailure, env: &dyn RequestEnvironment) -> Action {
        let reasons = &failure.reasons;

        if reasons.is_authenticated_but_not_authorized() {
            #[cfg(feature = "tracing")]
            tracing::debug!(host = %env.host(), "authenticated but not authorized");
            return self.redirect(env, false);
        }

        if reasons.is_unauthorized() {
            #[cfg(feature = "tracing")]
            tracing::debug!(host = %env.host(), "unauthorized");
            return self.redirect(env, true);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(host = %env.host(), reason = %failure.reason_text, "not found");

        Action::Delegate(NotFoundDelegation {
            strategy: self.domain_configuration(env).page_not_found_handling,
            status_header: self.settings.status_header.clone(),
            reason_text: failure.reason_text.clone(),
        })
    }
}
