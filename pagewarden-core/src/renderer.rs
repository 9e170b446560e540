//! The host's not-found rendering entry point.

use crate::error::BoxError;

/// Narrow capability over the host's page controller.
///
/// Invoking `render` hands response generation to the host. Implementations
/// live in the hosting application.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot render not-found pages",
    label = "missing `NotFoundRenderer` implementation",
    note = "Wrap the host's not-found handler in a type implementing `render`."
)]
pub trait NotFoundRenderer {
    /// Render the host's not-found page.
    ///
    /// `strategy` is the configured `pageNotFound_handling` value and
    /// `status_header` the header line to send (empty for none).
    fn render(
        &self,
        strategy: &str,
        status_header: &str,
        reason_text: &str,
    ) -> Result<(), BoxError>;
}

impl<T: NotFoundRenderer + ?Sized> NotFoundRenderer for &T {
    fn render(
        &self,
        strategy: &str,
        status_header: &str,
        reason_text: &str,
    ) -> Result<(), BoxError> {
        (**self).render(strategy, status_header, reason_text)
    }
}
