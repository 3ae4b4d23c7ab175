//! Port contracts for revision blurb rendering.
//!
//! Ports define infrastructure-agnostic interfaces used by blurb services.

pub mod renderer;

pub use renderer::{BlurbRenderer, RenderError, RenderResult};
