//! Application services for revision blurb orchestration.

mod binding;

pub use binding::RevisionBlurbService;
