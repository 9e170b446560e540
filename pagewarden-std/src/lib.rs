//! # pagewarden-std
//!
//! Standard implementations for the pagewarden not-found hook.
//!
//! This crate provides:
//! - **Configuration**: [`Settings`] loaded from TOML, [`StaticConfigProvider`]
//! - **Environments**: [`StaticEnvironment`], optionally derived from an `http::Request`
//! - **Hook wrappers**: [`TracingHook`]
//! - **Test doubles**: [`testing`]
//!
//! [`Settings`]: config::Settings
//! [`StaticConfigProvider`]: config::StaticConfigProvider
//! [`StaticEnvironment`]: environment::StaticEnvironment
//! [`TracingHook`]: hooks::TracingHook

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use pagewarden_core;

// Modules
pub mod config;
pub mod environment;
pub mod hooks;
pub mod testing;
