//! Standard hook wrappers.

pub mod tracing;

pub use self::tracing::TracingHook;
