//! Testing utilities for pagewarden.
//!
//! This module provides doubles for the host-side capabilities so hooks can
//! be exercised without a hosting application.
//!
//! # Features
//!
//! - [`RecordingRenderer`]: A renderer that records every call it receives
//! - [`FailingRenderer`]: A renderer that always fails
//! - [`FixedHook`]: A hook that always returns the same action

use pagewarden_core::{
    Action, BoxError, NotFoundRenderer, PageAccessFailure, PageNotFoundHook, RequestEnvironment,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Renderer
// ============================================================================

/// Arguments of one `render` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    /// The `pageNotFound_handling` strategy.
    pub strategy: String,
    /// The status header line.
    pub status_header: String,
    /// The reason text.
    pub reason_text: String,
}

/// A renderer that records all calls it receives.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = RecordingRenderer::new();
///
/// dispatcher.handle(&failure, &env, &renderer)?;
///
/// let calls = renderer.calls();
/// assert_eq!(calls.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    /// Create a new recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl NotFoundRenderer for RecordingRenderer {
    fn render(
        &self,
        strategy: &str,
        status_header: &str,
        reason_text: &str,
    ) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(RenderCall {
            strategy: strategy.to_owned(),
            status_header: status_header.to_owned(),
            reason_text: reason_text.to_owned(),
        });
        Ok(())
    }
}

// ============================================================================
// Failing Renderer
// ============================================================================

/// A renderer whose `render` always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRenderer;

impl NotFoundRenderer for FailingRenderer {
    fn render(&self, _: &str, _: &str, _: &str) -> Result<(), BoxError> {
        Err("not-found page could not be rendered".into())
    }
}

// ============================================================================
// Fixed Hook
// ============================================================================

/// A hook that ignores its input and returns a preset action.
///
/// Counts invocations of `decide`, shared across clones.
#[derive(Clone)]
pub struct FixedHook {
    action: Action,
    calls: Arc<AtomicUsize>,
}

impl FixedHook {
    /// Create a hook returning `action`.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `decide` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageNotFoundHook for FixedHook {
    fn decide(&self, _failure: &PageAccessFailure, _env: &dyn RequestEnvironment) -> Action {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.action.clone()
    }
}
