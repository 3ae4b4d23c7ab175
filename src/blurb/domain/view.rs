//! Derived view model consumed by drawer templates.

use super::{ExecState, LinkSpec, Revision};
use serde::Serialize;

/// View model for a single revision blurb.
///
/// Binding computes everything a template needs up front and leaves the
/// caller's revision record untouched; callers that want the normalized
/// state merged back use [`Revision::normalize_exec`] on their own value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionBlurb {
    href: String,
    show_status: bool,
    exec: ExecState,
    revision: Revision,
}

impl RevisionBlurb {
    /// Derives the view model from link inputs and a revision record.
    ///
    /// The href is computed from the spec's current bindings, the status
    /// indicator is enabled only for task links, and the revision copy held
    /// by the view is normalized so `exec` is always defined.
    #[must_use]
    pub fn bind(link: &LinkSpec, revision: &Revision) -> Self {
        let mut bound = revision.clone();
        bound.normalize_exec();
        let exec = bound.display_exec();
        Self {
            href: link.href(),
            show_status: link.kind().is_task(),
            exec,
            revision: bound,
        }
    }

    /// Returns the navigation href captured at bind time.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns whether the template should show a status indicator.
    #[must_use]
    pub const fn show_status(&self) -> bool {
        self.show_status
    }

    /// Returns the normalized execution state.
    #[must_use]
    pub const fn exec(&self) -> &ExecState {
        &self.exec
    }

    /// Returns the normalized revision copy held by the view.
    #[must_use]
    pub const fn revision(&self) -> &Revision {
        &self.revision
    }
}
