//! `minijinja`-backed rendering for revision blurbs.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use minijinja::Environment;

use crate::blurb::domain::RevisionBlurb;
use crate::blurb::ports::{BlurbRenderer, RenderError, RenderResult};

/// Markup partial compiled into the crate.
const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/revision_blurb.html");

/// Renders revision blurbs through a `minijinja` template.
///
/// The default template ships with the crate; hosts that maintain their own
/// partials can supply template source directly or point the renderer at a
/// partials directory containing
/// [`MinijinjaBlurbRenderer::TEMPLATE_FILE`].
#[derive(Debug, Clone)]
pub struct MinijinjaBlurbRenderer {
    template: String,
}

impl MinijinjaBlurbRenderer {
    /// File name of the blurb partial inside a partials directory.
    pub const TEMPLATE_FILE: &'static str = "revision_blurb.html";

    /// Creates a renderer using the built-in markup template.
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(DEFAULT_TEMPLATE)
    }

    /// Creates a renderer from caller-supplied template source.
    #[must_use]
    pub fn from_source(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Loads the blurb partial from a partials directory.
    ///
    /// Access is scoped to the given directory; the renderer reads only
    /// [`MinijinjaBlurbRenderer::TEMPLATE_FILE`] within it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateLoad`] when the directory cannot be
    /// opened or the partial cannot be read.
    pub fn from_partials_dir(path: &Utf8Path) -> RenderResult<Self> {
        let partials =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| {
                RenderError::TemplateLoad {
                    name: path.as_str().to_owned(),
                    reason: error.to_string(),
                }
            })?;
        let template =
            partials
                .read_to_string(Self::TEMPLATE_FILE)
                .map_err(|error| RenderError::TemplateLoad {
                    name: format!("{path}/{}", Self::TEMPLATE_FILE),
                    reason: error.to_string(),
                })?;
        Ok(Self { template })
    }
}

impl Default for MinijinjaBlurbRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlurbRenderer for MinijinjaBlurbRenderer {
    fn render(&self, blurb: &RevisionBlurb) -> RenderResult<String> {
        let environment = Environment::new();
        environment
            .render_str(&self.template, blurb)
            .map_err(|error| RenderError::TemplateRender(error.to_string()))
    }
}
