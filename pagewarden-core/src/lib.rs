//! # pagewarden-core
//!
//! Core types and traits for the pagewarden not-found hook.
//!
//! This crate has minimal dependencies and is meant to be imported by host
//! adapters that only need the capability traits.
//!
//! # Decision Flow
//!
//! A host calls the hook when a page request fails. The hook looks at the
//! [`AccessFailureReason`] and picks one of three branches:
//!
//! 1. **Authenticated but not authorized**: redirect to
//!    `pageNotAuthenticatedNotAuthorized_Url`.
//! 2. **Unauthorized**: redirect to `pageNotAuthorized_Url` with a
//!    `redirect_url` back to the requested page.
//! 3. **Anything else**: hand the request to the host's [`NotFoundRenderer`].
//!
//! Hooks implement [`PageNotFoundHook`]; the decision is a plain value
//! ([`Action`]) so it can be inspected before it is applied.
//!
//! Redirect targets come from a [`DomainConfiguration`] resolved through a
//! [`ConfigProvider`] by the current host, falling back to `_DEFAULT`.
//!
//! # Error Types
//!
//! - [`WardenError`] - Top-level error type
//! - [`ConfigError`] - Configuration loading errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod config;
mod environment;
mod error;
mod hook;
mod reason;
mod redirect;
mod renderer;

// Re-exports
pub use action::{Action, NotFoundDelegation, Outcome, Redirect};
pub use config::{
    ConfigProvider, DEFAULT_DOMAIN_KEY, DEFAULT_STATUS_HEADER, DomainConfiguration,
    GlobalSettings, resolve_domain,
};
pub use environment::RequestEnvironment;
pub use error::{BoxError, ConfigError, WardenError};
pub use hook::PageNotFoundHook;
pub use reason::{ANY_USER_GROUP, AccessFailureReason, GroupValue, PageAccessFailure};
pub use redirect::{REDIRECT_PARAM, build_redirect_url, raw_url_encode};
pub use renderer::NotFoundRenderer;
