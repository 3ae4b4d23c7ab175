//! Adapter implementations of the blurb rendering port.

pub mod template;

pub use template::MinijinjaBlurbRenderer;
