//! Host boundary contracts consumed by the addon-menu registrar.
//!
//! # Responsibility
//! - Describe the host facilities this crate consumes: run-mode discovery,
//!   toolkit preload, menu surface access, delayed re-invocation, and
//!   optional-module lookup.
//! - Keep every host facility injectable so tests can run against fakes.
//!
//! # Invariants
//! - Nothing in this module mutates host state; all mutation happens through
//!   handles the host itself provides.

pub mod run_mode;
pub mod spi;
