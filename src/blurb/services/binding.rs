//! Service layer binding revision blurbs and driving the renderer port.

use crate::blurb::domain::{LinkSpec, Revision, RevisionBlurb};
use crate::blurb::ports::{BlurbRenderer, RenderResult};
use std::sync::Arc;

/// Revision blurb orchestration service.
///
/// Holds the renderer behind the port so embedding views depend only on the
/// binding contract, not on a concrete template engine.
#[derive(Clone)]
pub struct RevisionBlurbService<R>
where
    R: BlurbRenderer,
{
    renderer: Arc<R>,
}

impl<R> RevisionBlurbService<R>
where
    R: BlurbRenderer,
{
    /// Creates a new blurb service.
    #[must_use]
    pub const fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    /// Binds link inputs and revision data into a view model.
    #[must_use]
    pub fn bind(&self, link: &LinkSpec, revision: &Revision) -> RevisionBlurb {
        RevisionBlurb::bind(link, revision)
    }

    /// Binds the inputs and renders the blurb markup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::blurb::ports::RenderError`] when the renderer cannot
    /// evaluate its template.
    pub fn render(&self, link: &LinkSpec, revision: &Revision) -> RenderResult<String> {
        let blurb = self.bind(link, revision);
        self.renderer.render(&blurb)
    }
}
