//! Drawer: view bindings for revisioned entities.
//!
//! This crate derives the display data a drawer template needs to show a
//! "revision blurb": a navigable link to a revisioned entity (a task, a code
//! change, etc.) together with a normalized execution status that controls
//! whether a status indicator appears.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure view-binding logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (template engines, etc.)
//!
//! # Modules
//!
//! - [`blurb`]: Revision blurb binding, normalization, and rendering

pub mod blurb;
