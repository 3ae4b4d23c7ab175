//! Renderer port turning blurb view models into markup.

use crate::blurb::domain::RevisionBlurb;
use thiserror::Error;

/// Result type for blurb rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering contract for revision blurbs.
///
/// The template behind an implementation must read the view model's href
/// for the anchor target and may branch on `show_status` and the execution
/// status for an indicator; everything else about the markup is the
/// implementation's business.
pub trait BlurbRenderer: Send + Sync {
    /// Renders markup for the given view model.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateRender`] when the template cannot be
    /// evaluated against the view model.
    fn render(&self, blurb: &RevisionBlurb) -> RenderResult<String>;
}

/// Errors returned by blurb renderer implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The template source could not be loaded.
    #[error("failed to load blurb template '{name}': {reason}")]
    TemplateLoad {
        /// Name of the template resource.
        name: String,
        /// Description of the load failure.
        reason: String,
    },

    /// Template evaluation failed.
    #[error("failed to render blurb template: {0}")]
    TemplateRender(String),
}
