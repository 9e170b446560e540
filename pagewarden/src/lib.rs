//! # pagewarden - Not-Found Hook for Access-Restricted Pages
//!
//! A host calls `pagewarden` when a page request fails. Failures caused by a
//! frontend group gate become a `401` redirect to a login or access-denied
//! page; everything else is handed back to the host's own not-found page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewarden::{NotFoundDispatcher, Outcome, Settings, StaticEnvironment};
//!
//! let dispatcher = NotFoundDispatcher::from_settings(Settings::from_file("pagewarden.toml")?);
//!
//! // Per failed request:
//! let env = StaticEnvironment::from_request(&request, "/");
//! match dispatcher.handle(&failure, &env, &host_renderer)? {
//!     Outcome::Redirected(response) => return response,
//!     Outcome::Delegated => {}
//! }
//! ```
//!
//! Wrap the dispatcher in [`TracingHook`] to get a span per request.

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;

pub use dispatcher::NotFoundDispatcher;

pub use pagewarden_core::{
    // Decision
    Action,
    // Failure input
    AccessFailureReason,
    // Configuration
    ConfigProvider,
    DomainConfiguration,
    GlobalSettings,
    GroupValue,
    NotFoundDelegation,
    // Host capabilities
    NotFoundRenderer,
    Outcome,
    PageAccessFailure,
    // Hook
    PageNotFoundHook,
    Redirect,
    RequestEnvironment,
    // Error types
    BoxError,
    ConfigError,
    WardenError,
    // Helpers
    build_redirect_url,
    raw_url_encode,
    resolve_domain,
};

pub use pagewarden_std::{
    config::{Settings, StaticConfigProvider},
    environment::StaticEnvironment,
    hooks::TracingHook,
};

/// Test doubles for host capabilities.
pub mod testing {
    pub use pagewarden_std::testing::{FailingRenderer, FixedHook, RecordingRenderer, RenderCall};
}

pub use http;
