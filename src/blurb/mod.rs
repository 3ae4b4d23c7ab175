//! Revision blurb binding and rendering.
//!
//! A blurb binds four host-supplied inputs — a link kind, a link id, a
//! revision record, and an optional fragment source — into a view model the
//! drawer template consumes: the navigation href, whether to show a status
//! indicator, and a normalized execution state. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
