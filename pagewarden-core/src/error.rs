//! Error types for pagewarden.
//!
//! The access decision itself never fails. Errors only surface at the edges:
//!
//! - [`WardenError`] - Top-level error type returned by hook execution
//! - [`ConfigError`] - Errors while loading domain configuration

use std::path::PathBuf;
use thiserror::Error;

/// A boxed error type for errors raised by host adapters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all pagewarden operations.
#[derive(Error, Debug)]
pub enum WardenError {
    /// Domain configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The host's not-found renderer failed.
    #[error("not-found renderer failed")]
    Render(#[source] BoxError),

    /// The redirect response could not be assembled.
    #[error("invalid redirect response: {0}")]
    Response(#[from] http::Error),
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid.
    #[error("failed to parse configuration: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
}

impl From<BoxError> for WardenError {
    fn from(err: BoxError) -> Self {
        WardenError::Render(err)
    }
}
