//! Shared world state for revision blurb BDD scenarios.

use std::sync::Arc;

use drawer::blurb::adapters::MinijinjaBlurbRenderer;
use drawer::blurb::domain::{LinkId, LinkKind, LinkSpec, Revision, RevisionBlurb};
use drawer::blurb::services::RevisionBlurbService;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBlurbService = RevisionBlurbService<MinijinjaBlurbRenderer>;

/// Scenario world for revision blurb behaviour tests.
pub struct BlurbWorld {
    pub service: TestBlurbService,
    pub kind: Option<LinkKind>,
    pub id: Option<LinkId>,
    pub fragment: Option<String>,
    pub revision: Revision,
    pub blurb: Option<RevisionBlurb>,
    pub markup: Option<String>,
}

impl BlurbWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: RevisionBlurbService::new(Arc::new(MinijinjaBlurbRenderer::new())),
            kind: None,
            id: None,
            fragment: None,
            revision: Revision::new(),
            blurb: None,
            markup: None,
        }
    }

    /// Builds the link spec from the bound scenario inputs.
    pub fn link_spec(&self) -> Result<LinkSpec, eyre::Report> {
        let kind = self
            .kind
            .clone()
            .ok_or_else(|| eyre::eyre!("missing link kind in scenario world"))?;
        let id = self
            .id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing link id in scenario world"))?;

        let mut spec = LinkSpec::new(kind, id);
        if let Some(fragment) = self.fragment.clone() {
            spec = spec.with_fragment(move || fragment.clone());
        }
        Ok(spec)
    }
}

impl Default for BlurbWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BlurbWorld {
    BlurbWorld::default()
}
