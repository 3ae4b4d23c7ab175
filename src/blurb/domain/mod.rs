//! Domain model for revision blurb binding.
//!
//! The blurb domain models drawer navigation targets, execution-state
//! normalization, and the derived view model while keeping all rendering
//! concerns outside of the domain boundary. Inputs are host-supplied and
//! deliberately unvalidated: a malformed link kind or id flows through to a
//! malformed path rather than an error.

mod exec;
mod link;
mod revision;
mod view;

pub use exec::ExecState;
pub use link::{FragmentSource, LinkId, LinkKind, LinkSpec};
pub use revision::Revision;
pub use view::RevisionBlurb;
